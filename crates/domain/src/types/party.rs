//! Parties: the people and organizations on either side of a contract

use serde::{Deserialize, Serialize};

/// Kind of party a contract binds.
///
/// The derived ordering (`Individual < Company < Agency`) is the user-facing
/// display order of contract groups and must not be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartyKind {
    Individual,
    Company,
    Agency,
}

impl PartyKind {
    /// Whether this kind covers multiple contractors under one agreement.
    pub fn is_organization(self) -> bool {
        matches!(self, Self::Company | Self::Agency)
    }
}

/// A person or organization referenced by contracts and entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    pub id: String,
    pub name: String,
    pub kind: PartyKind,
}

impl Party {
    pub fn new(id: &str, name: &str, kind: PartyKind) -> Self {
        Self { id: id.to_string(), name: name.to_string(), kind }
    }
}
