//! Error types for scenario construction.
//!
//! Organized by subsystem: world catalog, sensor factory, agent factory and
//! scenario builder. Every error is raised synchronously by the call that
//! detects it; a failing call never leaves partially-applied state behind.

use std::error::Error;
use std::fmt;

/// A world identifier that is not in the catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownWorld {
    /// The identifier that failed to resolve.
    pub identifier: String,
}

impl fmt::Display for UnknownWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown world '{}'", self.identifier)
    }
}

impl Error for UnknownWorld {}

/// An agent type that is not in the fixed set of vehicle classes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownAgentType {
    /// The identifier that failed to resolve.
    pub identifier: String,
}

impl fmt::Display for UnknownAgentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown agent type '{}'", self.identifier)
    }
}

impl Error for UnknownAgentType {}

/// Why a sensor option was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SensorConfigIssue {
    /// The option name is not part of this sensor kind's schema.
    UnknownOption,
    /// The value has the wrong type for the option.
    WrongType {
        /// Human-readable name of the expected type.
        expected: &'static str,
    },
    /// The value has the right type but violates the option's range.
    OutOfRange {
        /// Human-readable description of the accepted range.
        constraint: &'static str,
    },
    /// The sensor name is empty.
    EmptyName,
}

impl fmt::Display for SensorConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownOption => write!(f, "unknown option"),
            Self::WrongType { expected } => write!(f, "expected {expected}"),
            Self::OutOfRange { constraint } => write!(f, "must be {constraint}"),
            Self::EmptyName => write!(f, "sensor name must not be empty"),
        }
    }
}

/// A sensor option failed type, range or schema validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SensorConfigError {
    /// Host identifier of the sensor kind (e.g. `"ImagingSonar"`).
    pub sensor_type: &'static str,
    /// The offending field.
    pub field: String,
    /// The rejected value, rendered for display.
    pub value: String,
    /// What was wrong with it.
    pub issue: SensorConfigIssue,
}

impl fmt::Display for SensorConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid {} option '{}' = {}: {}",
            self.sensor_type, self.field, self.value, self.issue
        )
    }
}

impl Error for SensorConfigError {}

/// Errors from agent construction and sensor attachment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AgentError {
    /// The agent name is empty.
    EmptyName,
    /// A sensor with the same name is already attached to this agent.
    DuplicateSensorName {
        /// Name of the agent.
        agent: String,
        /// The colliding sensor name.
        sensor: String,
    },
    /// A starting pose component is NaN or infinite.
    NonFinitePose {
        /// Name of the agent.
        agent: String,
        /// `"location"` or `"rotation"`.
        field: &'static str,
    },
}

impl fmt::Display for AgentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "agent name must not be empty"),
            Self::DuplicateSensorName { agent, sensor } => {
                write!(f, "agent '{agent}' already has a sensor named '{sensor}'")
            }
            Self::NonFinitePose { agent, field } => {
                write!(f, "agent '{agent}' has a non-finite starting {field}")
            }
        }
    }
}

impl Error for AgentError {}

/// Export-time invariant violations, one per failed check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationFailure {
    /// No world was selected.
    NoWorld,
    /// The scenario contains no agents.
    NoAgents,
    /// `main_agent` names an agent that is not in the scenario.
    UnknownMainAgent {
        /// The dangling reference.
        name: String,
    },
    /// `main_agent` names an agent that cannot receive commands.
    MainAgentNotControllable {
        /// Name of the agent.
        name: String,
    },
    /// A simulation rate is zero.
    InvalidRate {
        /// `"ticks_per_sec"` or `"frames_per_sec"`.
        field: &'static str,
        /// The rejected value.
        value: u32,
    },
    /// The host package name is empty.
    EmptyPackageName,
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWorld => write!(f, "no world selected"),
            Self::NoAgents => write!(f, "scenario has no agents"),
            Self::UnknownMainAgent { name } => {
                write!(f, "main agent '{name}' is not in the scenario")
            }
            Self::MainAgentNotControllable { name } => {
                write!(f, "main agent '{name}' is not controllable")
            }
            Self::InvalidRate { field, value } => {
                write!(f, "{field} must be positive, got {value}")
            }
            Self::EmptyPackageName => write!(f, "package name must not be empty"),
        }
    }
}

impl Error for ValidationFailure {}

/// Errors from the scenario builder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScenarioError {
    /// An agent with the same name is already in the scenario.
    DuplicateAgentName {
        /// The colliding agent name.
        name: String,
    },
    /// Export-time validation failed.
    Validation(ValidationFailure),
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateAgentName { name } => {
                write!(f, "scenario already has an agent named '{name}'")
            }
            Self::Validation(failure) => write!(f, "scenario validation failed: {failure}"),
        }
    }
}

impl Error for ScenarioError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::DuplicateAgentName { .. } => None,
            Self::Validation(failure) => Some(failure),
        }
    }
}

impl From<ValidationFailure> for ScenarioError {
    fn from(failure: ValidationFailure) -> Self {
        Self::Validation(failure)
    }
}

/// Any error raised while assembling a scenario.
///
/// Lets callers chain sensor, agent and scenario calls with a single `?`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuildError {
    /// World catalog lookup failed.
    World(UnknownWorld),
    /// Agent type lookup failed.
    AgentType(UnknownAgentType),
    /// Sensor construction failed.
    Sensor(SensorConfigError),
    /// Agent construction or sensor attachment failed.
    Agent(AgentError),
    /// Scenario mutation or export failed.
    Scenario(ScenarioError),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::World(e) => write!(f, "world: {e}"),
            Self::AgentType(e) => write!(f, "agent type: {e}"),
            Self::Sensor(e) => write!(f, "sensor: {e}"),
            Self::Agent(e) => write!(f, "agent: {e}"),
            Self::Scenario(e) => write!(f, "scenario: {e}"),
        }
    }
}

impl Error for BuildError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::World(e) => Some(e),
            Self::AgentType(e) => Some(e),
            Self::Sensor(e) => Some(e),
            Self::Agent(e) => Some(e),
            Self::Scenario(e) => Some(e),
        }
    }
}

impl From<UnknownWorld> for BuildError {
    fn from(e: UnknownWorld) -> Self {
        Self::World(e)
    }
}

impl From<UnknownAgentType> for BuildError {
    fn from(e: UnknownAgentType) -> Self {
        Self::AgentType(e)
    }
}

impl From<SensorConfigError> for BuildError {
    fn from(e: SensorConfigError) -> Self {
        Self::Sensor(e)
    }
}

impl From<AgentError> for BuildError {
    fn from(e: AgentError) -> Self {
        Self::Agent(e)
    }
}

impl From<ScenarioError> for BuildError {
    fn from(e: ScenarioError) -> Self {
        Self::Scenario(e)
    }
}
