//! Account records at the identity boundary.

use super::{Player, UserId};

/// Administrative account payload.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Admin {
    pub is_active: bool,
}

/// Kind-specific payload of an account.
///
/// A tagged variant instead of a subtype hierarchy: dispatch on the kind is
/// explicit at the call site and no downcasting exists anywhere.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UserKind {
    Player(Box<Player>),
    Admin(Admin),
}

/// An authenticated account. The core trusts the identifier it is given and
/// never authenticates; credentials live behind the identity boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub kind: UserKind,
}

impl User {
    pub fn player(&self) -> Option<&Player> {
        match &self.kind {
            UserKind::Player(player) => Some(player),
            UserKind::Admin(_) => None,
        }
    }
}
