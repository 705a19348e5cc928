//! The mutable scenario builder.
//!
//! Mutations that can be checked locally (agent name collisions, world
//! lookups) fail immediately and leave the builder untouched. Cross-field
//! checks run once, in [`ScenarioBuilder::export`].

use indexmap::IndexMap;
use tracing::{debug, info};

use aquascene_agent::AgentDescriptor;
use aquascene_core::{ScenarioError, UnknownWorld, ValidationFailure, WorldId};

use crate::export::{FrameRate, ScenarioExport};

/// Host world package used when none is set.
pub const DEFAULT_PACKAGE: &str = "Ocean";

/// Simulation ticks per second used when none is set.
pub const DEFAULT_TICKS_PER_SEC: u32 = 30;

/// Aggregate root for one scenario.
///
/// Every setter returns `&mut Self` so calls chain; fallible setters return
/// `Result<&mut Self, _>` and chain with `?`.
#[derive(Clone, Debug)]
pub struct ScenarioBuilder {
    name: String,
    world: Option<WorldId>,
    package_name: String,
    main_agent: Option<String>,
    ticks_per_sec: u32,
    frames_per_sec: FrameRate,
    agents: IndexMap<String, AgentDescriptor>,
}

impl ScenarioBuilder {
    /// An empty scenario with default package and rates.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            world: None,
            package_name: DEFAULT_PACKAGE.to_string(),
            main_agent: None,
            ticks_per_sec: DEFAULT_TICKS_PER_SEC,
            frames_per_sec: FrameRate::default(),
            agents: IndexMap::new(),
        }
    }

    /// An empty scenario in `world`.
    pub fn with_world(name: impl Into<String>, world: WorldId) -> Self {
        let mut builder = Self::new(name);
        builder.world = Some(world);
        builder
    }

    // ── Mutation ───────────────────────────────────────────────────

    /// Select the world, replacing any earlier choice.
    pub fn set_world(&mut self, world: WorldId) -> &mut Self {
        debug!(scenario = %self.name, %world, "set world");
        self.world = Some(world);
        self
    }

    /// Select the world by its catalog identifier.
    pub fn set_world_name(&mut self, identifier: &str) -> Result<&mut Self, UnknownWorld> {
        let world = WorldId::resolve(identifier)?;
        Ok(self.set_world(world))
    }

    /// Set the host world package.
    pub fn set_package(&mut self, package_name: impl Into<String>) -> &mut Self {
        self.package_name = package_name.into();
        self
    }

    /// Name the primary agent. Existence is checked at export.
    pub fn set_main_agent(&mut self, name: impl Into<String>) -> &mut Self {
        let name = name.into();
        debug!(scenario = %self.name, main_agent = %name, "set main agent");
        self.main_agent = Some(name);
        self
    }

    /// Set the simulation tick rate. Zero is rejected at export.
    pub fn set_ticks_per_second(&mut self, ticks: u32) -> &mut Self {
        self.ticks_per_sec = ticks;
        self
    }

    /// Set the render rate. `Capped(0)` is rejected at export.
    pub fn set_frames_per_second(&mut self, rate: FrameRate) -> &mut Self {
        self.frames_per_sec = rate;
        self
    }

    /// Append an agent. Fails if the name is already taken.
    pub fn add_agent(&mut self, agent: AgentDescriptor) -> Result<&mut Self, ScenarioError> {
        if self.agents.contains_key(agent.name()) {
            return Err(ScenarioError::DuplicateAgentName {
                name: agent.name().to_string(),
            });
        }
        debug!(
            scenario = %self.name,
            agent = agent.name(),
            agent_type = agent.agent_type().as_str(),
            sensors = agent.sensors().len(),
            "added agent"
        );
        self.agents.insert(agent.name().to_string(), agent);
        Ok(self)
    }

    /// Remove an agent by name, keeping the order of the rest.
    pub fn remove_agent(&mut self, name: &str) -> Option<AgentDescriptor> {
        self.agents.shift_remove(name)
    }

    /// Remove every agent.
    pub fn clear_agents(&mut self) -> &mut Self {
        self.agents.clear();
        self
    }

    // ── Accessors ──────────────────────────────────────────────────

    /// Scenario name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Selected world, if any.
    pub fn world(&self) -> Option<WorldId> {
        self.world
    }

    /// Host world package.
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Explicitly named primary agent, if any.
    pub fn main_agent(&self) -> Option<&str> {
        self.main_agent.as_deref()
    }

    /// Simulation tick rate.
    pub fn ticks_per_second(&self) -> u32 {
        self.ticks_per_sec
    }

    /// Render rate.
    pub fn frames_per_second(&self) -> FrameRate {
        self.frames_per_sec
    }

    /// Agents in insertion order.
    pub fn agents(&self) -> impl ExactSizeIterator<Item = &AgentDescriptor> + '_ {
        self.agents.values()
    }

    /// Look up an agent by name.
    pub fn agent(&self, name: &str) -> Option<&AgentDescriptor> {
        self.agents.get(name)
    }

    /// Number of agents.
    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    // ── Export ─────────────────────────────────────────────────────

    /// Check every cross-field invariant, returning the first failure.
    pub fn validate(&self) -> Result<(), ValidationFailure> {
        self.resolved().map(|_| ())
    }

    fn resolved(&self) -> Result<(WorldId, &AgentDescriptor), ValidationFailure> {
        let world = self.world.ok_or(ValidationFailure::NoWorld)?;
        if self.agents.is_empty() {
            return Err(ValidationFailure::NoAgents);
        }
        let main = match &self.main_agent {
            Some(name) => self
                .agents
                .get(name)
                .ok_or_else(|| ValidationFailure::UnknownMainAgent { name: name.clone() })?,
            None => self
                .agents
                .first()
                .map(|(_, agent)| agent)
                .ok_or(ValidationFailure::NoAgents)?,
        };
        if !main.is_controllable() {
            return Err(ValidationFailure::MainAgentNotControllable {
                name: main.name().to_string(),
            });
        }
        if self.ticks_per_sec == 0 {
            return Err(ValidationFailure::InvalidRate {
                field: "ticks_per_sec",
                value: 0,
            });
        }
        if self.frames_per_sec == FrameRate::Capped(0) {
            return Err(ValidationFailure::InvalidRate {
                field: "frames_per_sec",
                value: 0,
            });
        }
        if self.package_name.is_empty() {
            return Err(ValidationFailure::EmptyPackageName);
        }
        Ok((world, main))
    }

    /// Validate and assemble the host document.
    ///
    /// The result is a pure function of builder state: identical call
    /// sequences produce identical exports.
    pub fn export(&self) -> Result<ScenarioExport, ScenarioError> {
        let (world, main) = self.resolved()?;
        let export = ScenarioExport {
            name: self.name.clone(),
            world,
            package_name: self.package_name.clone(),
            main_agent: main.name().to_string(),
            ticks_per_sec: self.ticks_per_sec,
            frames_per_sec: self.frames_per_sec,
            agents: self.agents.values().map(AgentDescriptor::export).collect(),
        };
        info!(
            scenario = %export.name,
            world = %export.world,
            agents = export.agents.len(),
            main_agent = %export.main_agent,
            "exported scenario"
        );
        Ok(export)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aquascene_agent::{AgentType, VehiclePreset};

    fn rov(name: &str) -> AgentDescriptor {
        VehiclePreset::bluerov2(name).build().unwrap()
    }

    #[test]
    fn defaults() {
        let b = ScenarioBuilder::new("s");
        assert_eq!(b.package_name(), "Ocean");
        assert_eq!(b.ticks_per_second(), 30);
        assert_eq!(b.frames_per_second(), FrameRate::Capped(30));
        assert_eq!(b.world(), None);
        assert_eq!(b.agent_count(), 0);
    }

    #[test]
    fn duplicate_agent_leaves_builder_untouched() {
        let mut b = ScenarioBuilder::new("s");
        b.add_agent(rov("rov0")).unwrap();
        let heavy = VehiclePreset::bluerov_heavy("rov0").build().unwrap();
        let err = b.add_agent(heavy).unwrap_err();
        assert_eq!(
            err,
            ScenarioError::DuplicateAgentName {
                name: "rov0".to_string()
            }
        );
        assert_eq!(b.agent_count(), 1);
        assert_eq!(b.agent("rov0").unwrap().agent_type(), AgentType::BlueRov2);
    }

    #[test]
    fn chained_mutation() {
        let mut b = ScenarioBuilder::new("s");
        b.set_world(WorldId::Dam)
            .set_package("Ocean")
            .add_agent(rov("a"))
            .unwrap()
            .add_agent(rov("b"))
            .unwrap()
            .set_main_agent("b");
        assert_eq!(b.export().unwrap().main_agent, "b");
    }

    #[test]
    fn set_world_overwrites() {
        let mut b = ScenarioBuilder::with_world("s", WorldId::Dam);
        b.set_world(WorldId::OpenWater);
        assert_eq!(b.world(), Some(WorldId::OpenWater));
    }

    #[test]
    fn unknown_world_name_keeps_previous_world() {
        let mut b = ScenarioBuilder::with_world("s", WorldId::Dam);
        assert!(b.set_world_name("Atlantis").is_err());
        assert_eq!(b.world(), Some(WorldId::Dam));
        b.set_world_name("PierHarbor").unwrap();
        assert_eq!(b.world(), Some(WorldId::PierHarbor));
    }

    #[test]
    fn main_agent_defaults_to_first() {
        let mut b = ScenarioBuilder::with_world("s", WorldId::Dam);
        b.add_agent(rov("first")).unwrap();
        b.add_agent(rov("second")).unwrap();
        assert_eq!(b.export().unwrap().main_agent, "first");
    }

    #[test]
    fn remove_agent_preserves_order() {
        let mut b = ScenarioBuilder::with_world("s", WorldId::Dam);
        for name in ["a", "b", "c"] {
            b.add_agent(rov(name)).unwrap();
        }
        assert!(b.remove_agent("b").is_some());
        assert!(b.remove_agent("b").is_none());
        let names: Vec<_> = b.agents().map(AgentDescriptor::name).collect();
        assert_eq!(names, ["a", "c"]);
        b.clear_agents();
        assert_eq!(b.agent_count(), 0);
    }

    #[test]
    fn validation_failures() {
        let mut b = ScenarioBuilder::new("s");
        assert_eq!(b.validate(), Err(ValidationFailure::NoWorld));
        b.set_world(WorldId::Dam);
        assert_eq!(b.validate(), Err(ValidationFailure::NoAgents));
        b.add_agent(rov("rov0")).unwrap();
        b.set_main_agent("ghost");
        assert_eq!(
            b.validate(),
            Err(ValidationFailure::UnknownMainAgent {
                name: "ghost".to_string()
            })
        );
        b.set_main_agent("rov0");
        assert_eq!(b.validate(), Ok(()));
        b.set_ticks_per_second(0);
        assert!(matches!(
            b.validate(),
            Err(ValidationFailure::InvalidRate {
                field: "ticks_per_sec",
                ..
            })
        ));
        b.set_ticks_per_second(60)
            .set_frames_per_second(FrameRate::Capped(0));
        assert!(matches!(
            b.validate(),
            Err(ValidationFailure::InvalidRate {
                field: "frames_per_sec",
                ..
            })
        ));
        b.set_frames_per_second(FrameRate::Uncapped).set_package("");
        assert_eq!(b.validate(), Err(ValidationFailure::EmptyPackageName));
    }

    #[test]
    fn passive_main_agent_rejected() {
        let buoy = AgentDescriptor::builder("buoy", AgentType::SurfaceVessel)
            .controllable(false)
            .build()
            .unwrap();
        let mut b = ScenarioBuilder::with_world("s", WorldId::OpenWater);
        b.add_agent(buoy).unwrap();
        let err = b.export().unwrap_err();
        assert_eq!(
            err,
            ScenarioError::Validation(ValidationFailure::MainAgentNotControllable {
                name: "buoy".to_string()
            })
        );
        b.add_agent(rov("rov0")).unwrap().set_main_agent("rov0");
        assert!(b.export().is_ok());
    }
}
