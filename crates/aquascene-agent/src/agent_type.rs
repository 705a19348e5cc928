//! Vehicle classes the host can spawn.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use aquascene_core::UnknownAgentType;

/// A vehicle class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentType {
    /// Hovering AUV with eight thrusters.
    #[serde(rename = "HoveringAUV")]
    HoveringAuv,
    /// Torpedo-shaped AUV with fins.
    #[serde(rename = "TorpedoAUV")]
    TorpedoAuv,
    /// Surface vessel.
    SurfaceVessel,
    /// BlueROV2 in the vectored configuration.
    #[serde(rename = "BlueROV2")]
    BlueRov2,
    /// BlueROV2 in the heavy configuration.
    #[serde(rename = "BlueROVHeavy")]
    BlueRovHeavy,
    /// CoUGARo AUV.
    #[serde(rename = "CoUGARo")]
    Cougaro,
}

impl AgentType {
    const ALL: [AgentType; 6] = [
        AgentType::HoveringAuv,
        AgentType::TorpedoAuv,
        AgentType::SurfaceVessel,
        AgentType::BlueRov2,
        AgentType::BlueRovHeavy,
        AgentType::Cougaro,
    ];

    /// Every vehicle class.
    pub fn all() -> &'static [AgentType] {
        &Self::ALL
    }

    /// The `agent_type` string the host expects.
    pub fn as_str(self) -> &'static str {
        match self {
            AgentType::HoveringAuv => "HoveringAUV",
            AgentType::TorpedoAuv => "TorpedoAUV",
            AgentType::SurfaceVessel => "SurfaceVessel",
            AgentType::BlueRov2 => "BlueROV2",
            AgentType::BlueRovHeavy => "BlueROVHeavy",
            AgentType::Cougaro => "CoUGARo",
        }
    }
}

impl fmt::Display for AgentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentType {
    type Err = UnknownAgentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownAgentType {
                identifier: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_matches_as_str() {
        for &t in AgentType::all() {
            assert_eq!(t.as_str().parse::<AgentType>(), Ok(t));
        }
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "Submarine".parse::<AgentType>().unwrap_err();
        assert_eq!(err.identifier, "Submarine");
    }

    #[test]
    fn serde_name_matches_as_str() {
        for &t in AgentType::all() {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.as_str()));
        }
    }
}
