//! Content catalog loader.

use std::path::Path;

use crate::Catalog;
use crate::loaders::{LoadResult, read_file};

/// Loader for catalog overrides from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a full catalog from a RON file.
    ///
    /// The override replaces the built-in catalog wholesale; pools left
    /// empty will surface as generation errors, not fall back.
    pub fn load(path: &Path) -> LoadResult<Catalog> {
        let content = read_file(path)?;
        let catalog: Catalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog RON: {}", e))?;

        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use delve_core::entity::{MonsterKind, Rarity};
    use delve_core::env::ContentOracle;

    const OVERRIDE: &str = r#"(
        dungeons: [(name: "Gloomhollow", description: "A test depth")],
        rooms: [(name: "Bare Cell", description: "Nothing but stone")],
        monsters: { Goblin: ["Snagtooth"] },
        artifacts: { Common: ["Bent Spoon"] },
    )"#;

    #[test]
    fn override_catalog_round_trips_through_ron() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", OVERRIDE).unwrap();

        let catalog = CatalogLoader::load(file.path()).unwrap();

        assert_eq!(catalog.dungeon_templates().len(), 1);
        assert_eq!(catalog.dungeon_templates()[0].name, "Gloomhollow");
        assert_eq!(catalog.monster_names(MonsterKind::Goblin), ["Snagtooth"]);
        assert_eq!(catalog.artifact_names(Rarity::Common), ["Bent Spoon"]);
        // Pools absent from the override are empty, not defaulted
        assert!(catalog.monster_names(MonsterKind::Dragon).is_empty());
    }

    #[test]
    fn builtin_catalog_serializes_and_reloads() {
        let builtin = Catalog::builtin();
        let text = ron::to_string(&builtin).unwrap();
        let reloaded: Catalog = ron::from_str(&text).unwrap();
        assert_eq!(builtin, reloaded);
    }
}
