//! The world catalog: every environment the host ships in its `Ocean` package.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownWorld;

/// A validated world identifier.
///
/// The set is closed; unknown names are rejected by [`WorldId::resolve`].
/// Serializes as the host's identifier string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WorldId {
    /// Dock and harbor environment with shallow water.
    PierHarbor,
    /// Open sea without obstacles.
    OpenWater,
    /// Flat seabed for quick tests.
    SimpleUnderwater,
    /// Underwater dam structure.
    Dam,
    /// Closed environment with rooms and corridors.
    Rooms,
}

impl WorldId {
    const ALL: [WorldId; 5] = [
        WorldId::PierHarbor,
        WorldId::OpenWater,
        WorldId::SimpleUnderwater,
        WorldId::Dam,
        WorldId::Rooms,
    ];

    /// Every world in catalog order.
    pub fn all() -> &'static [WorldId] {
        &Self::ALL
    }

    /// The identifier string the host expects.
    pub fn as_str(self) -> &'static str {
        match self {
            WorldId::PierHarbor => "PierHarbor",
            WorldId::OpenWater => "OpenWater",
            WorldId::SimpleUnderwater => "SimpleUnderwater",
            WorldId::Dam => "Dam",
            WorldId::Rooms => "Rooms",
        }
    }

    /// Look up a world by its exact, case-sensitive identifier.
    pub fn resolve(identifier: &str) -> Result<Self, UnknownWorld> {
        Self::ALL
            .iter()
            .copied()
            .find(|w| w.as_str() == identifier)
            .ok_or_else(|| UnknownWorld {
                identifier: identifier.to_string(),
            })
    }
}

impl fmt::Display for WorldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorldId {
    type Err = UnknownWorld;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}
