//! Built-in content catalog.

use std::collections::HashMap;

use delve_core::entity::{MonsterKind, Rarity};
use delve_core::env::{ContentOracle, Template};

/// Flavor pools backing the entity factories.
///
/// The built-in tables ship with the crate; deployments can replace them
/// wholesale by loading a RON override through
/// [`crate::loaders::CatalogLoader`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalog {
    pub dungeons: Vec<Template>,
    pub rooms: Vec<Template>,
    pub monsters: HashMap<MonsterKind, Vec<String>>,
    pub artifacts: HashMap<Rarity, Vec<String>>,
}

impl Catalog {
    /// The catalog compiled into the crate.
    pub fn builtin() -> Self {
        let dungeons = [
            ("The Abandoned Depths", "An ancient place filled with dangers and untold treasures"),
            ("Tower of Shadows", "Few who enter these halls return to tell the tale"),
            ("Crimson Catacombs", "Dark magic seeps from every stone of this cursed place"),
            ("The Lost Temple", "Legends speak of great riches hidden within"),
            ("Abyssal Fortress", "The air itself feels hostile in this forgotten realm"),
            ("Dragon's Keep", "A maze of corridors where death waits around every corner"),
            ("The Cursed Citadel", "Ancient curses guard the treasures it holds"),
            ("Ruins of Eternity", "Time has forgotten this place, but evil has not"),
            ("The Dark Sanctuary", "A sanctuary corrupted by shadowy forces"),
            ("Tomb of the Ancient Kings", "The resting place of forgotten sovereigns"),
            ("Infernal Dungeon", "Flames and fury await those who dare to enter"),
            ("Castle Morfroi", "A once-proud fortress, now home to nightmares"),
        ];

        let rooms = [
            ("Dark Chamber", "A dark passage filled with ancient mysteries"),
            ("Crystal Cave", "The walls shimmer with crystalline formations"),
            ("Ancient Hall", "Grand pillars reach toward a vaulted ceiling"),
            ("Shadow Corridor", "Shadows dance on the stone walls"),
            ("Mystic Shrine", "Strange runes glow with ethereal light"),
            ("Forgotten Crypt", "The air is thick with the scent of decay"),
            ("Sacred Sanctum", "A holy place now abandoned and silent"),
            ("Hidden Vault", "Ancient treasures lie hidden here"),
            ("Cursed Throne Room", "An ominous throne dominates the chamber"),
            ("Abandoned Library", "Dusty tomes line the crumbling shelves"),
            ("Torture Chamber", "Rusty chains hang from the blood-stained walls"),
            ("Treasury", "Gold and jewels glitter in the dim light"),
            ("Ritual Circle", "Arcane symbols are carved into the floor"),
            ("War Room", "Old battle plans still hang on the walls"),
            ("Armory", "Weapons of ages past rest in their racks"),
            ("Dragon's Lair", "The heat is oppressive and the air smells of sulfur"),
        ];

        let monsters: [(MonsterKind, [&str; 4]); 8] = [
            (MonsterKind::Dragon, ["Drakor", "Fyrezor", "Scalewing", "Infernus"]),
            (MonsterKind::Goblin, ["Gribble", "Snark", "Grimp", "Razz"]),
            (MonsterKind::Troll, ["Grunk", "Thud", "Bouldar", "Smash"]),
            (MonsterKind::Undead, ["Skeleton Warrior", "Zombie", "Wraith", "Ghoul"]),
            (MonsterKind::Beast, ["Dire Wolf", "Giant Spider", "Cave Bear", "Wyvern"]),
            (MonsterKind::Demon, ["Hellspawn", "Dreadlord", "Abyssal", "Tormentor"]),
            (MonsterKind::Elemental, ["Fire Elemental", "Ice Golem", "Storm Spirit", "Earth Guardian"]),
            (MonsterKind::Humanoid, ["Bandit", "Cultist", "Dark Knight", "Assassin"]),
        ];

        let artifacts: [(Rarity, [&str; 3]); 5] = [
            (Rarity::Common, ["Rusty Sword", "Worn Shield", "Leather Boots"]),
            (Rarity::Rare, ["Silver Dagger", "Enchanted Ring", "Magic Cloak"]),
            (Rarity::Epic, ["Dragonslayer", "Crown of Kings", "Phoenix Feather"]),
            (Rarity::Legendary, ["Excalibur", "Hammer of Thor", "Holy Grail"]),
            (Rarity::Mythical, ["Eye of Eternity", "Essence of the Void", "Celestial Blade"]),
        ];

        Self {
            dungeons: dungeons
                .into_iter()
                .map(|(name, description)| Template::new(name, description))
                .collect(),
            rooms: rooms
                .into_iter()
                .map(|(name, description)| Template::new(name, description))
                .collect(),
            monsters: monsters
                .into_iter()
                .map(|(kind, names)| (kind, names.into_iter().map(String::from).collect()))
                .collect(),
            artifacts: artifacts
                .into_iter()
                .map(|(rarity, names)| (rarity, names.into_iter().map(String::from).collect()))
                .collect(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ContentOracle for Catalog {
    fn dungeon_templates(&self) -> &[Template] {
        &self.dungeons
    }

    fn room_templates(&self) -> &[Template] {
        &self.rooms
    }

    fn monster_names(&self, kind: MonsterKind) -> &[String] {
        self.monsters.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    fn artifact_names(&self, rarity: Rarity) -> &[String] {
        self.artifacts.get(&rarity).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn builtin_pools_are_never_empty() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.dungeon_templates().len(), 12);
        assert_eq!(catalog.room_templates().len(), 16);
        for kind in MonsterKind::iter() {
            assert_eq!(catalog.monster_names(kind).len(), 4);
        }
        for rarity in Rarity::iter() {
            assert_eq!(catalog.artifact_names(rarity).len(), 3);
        }
    }
}
