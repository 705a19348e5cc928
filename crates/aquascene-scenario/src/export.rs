//! The exported scenario structure handed to the host.
//!
//! Field names and nesting follow the host's scenario schema. Serializing a
//! [`ScenarioExport`] with `serde_json` yields the document the host loads.

use std::fmt;

use serde::{Deserialize, Serialize};

use aquascene_agent::AgentEntry;
use aquascene_core::WorldId;

// ── FrameRate ──────────────────────────────────────────────────────

/// Render rate requested from the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawFrameRate", into = "RawFrameRate")]
pub enum FrameRate {
    /// Render at most this many frames per second.
    Capped(u32),
    /// Render as fast as the host can. Exported as `false`.
    Uncapped,
}

impl Default for FrameRate {
    fn default() -> Self {
        Self::Capped(30)
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Capped(fps) => write!(f, "{fps} fps"),
            Self::Uncapped => f.write_str("uncapped"),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawFrameRate {
    Capped(u32),
    Flag(bool),
}

impl From<FrameRate> for RawFrameRate {
    fn from(rate: FrameRate) -> Self {
        match rate {
            FrameRate::Capped(fps) => Self::Capped(fps),
            FrameRate::Uncapped => Self::Flag(false),
        }
    }
}

impl TryFrom<RawFrameRate> for FrameRate {
    type Error = String;

    fn try_from(raw: RawFrameRate) -> Result<Self, Self::Error> {
        match raw {
            RawFrameRate::Capped(fps) => Ok(Self::Capped(fps)),
            RawFrameRate::Flag(false) => Ok(Self::Uncapped),
            RawFrameRate::Flag(true) => {
                Err("frames_per_sec must be a number or false".to_string())
            }
        }
    }
}

// ── ScenarioExport ─────────────────────────────────────────────────

/// A validated scenario in the host's schema.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioExport {
    /// Scenario name.
    pub name: String,
    /// World the scenario loads.
    pub world: WorldId,
    /// Host world package.
    pub package_name: String,
    /// Agent the host treats as primary.
    pub main_agent: String,
    /// Simulation ticks per second.
    pub ticks_per_sec: u32,
    /// Render rate.
    pub frames_per_sec: FrameRate,
    /// Agents in insertion order.
    pub agents: Vec<AgentEntry>,
}

impl ScenarioExport {
    /// Compact JSON, byte-identical for identical scenarios.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Indented JSON for humans.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// The export as a generic JSON value.
    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Parse a previously exported document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Look up an exported agent by name.
    pub fn agent(&self, name: &str) -> Option<&AgentEntry> {
        self.agents.iter().find(|a| a.agent_name == name)
    }
}
