//! Supported entity kinds

use serde::{Deserialize, Serialize};
use std::fmt;

/// An entity kind the datasource can page through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// PagerDuty teams (`/teams`)
    Teams,
}

impl EntityKind {
    /// Every supported kind
    pub const ALL: &'static [EntityKind] = &[EntityKind::Teams];

    /// External ID used in URLs and as the envelope's record key
    pub fn external_id(self) -> &'static str {
        match self {
            EntityKind::Teams => "teams",
        }
    }

    /// Attribute that uniquely identifies a record of this kind
    pub fn unique_id_attribute(self) -> &'static str {
        match self {
            EntityKind::Teams => "id",
        }
    }

    /// Look up a kind by its external ID
    pub fn from_external_id(external_id: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.external_id() == external_id)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.external_id())
    }
}
