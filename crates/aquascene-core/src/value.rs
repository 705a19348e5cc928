//! Loosely-typed option values as callers supply them to sensor factories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A 3-component vector: `[x, y, z]` in meters or `[roll, pitch, yaw]` in degrees.
pub type Vec3 = [f64; 3];

/// A single sensor option value.
///
/// Factories validate each value against the option's declared type before
/// storing it; the stored value is exported verbatim, never coerced.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// `true` / `false`.
    Bool(bool),
    /// An integer (bin counts, identifiers, seeds).
    Int(i64),
    /// A floating-point quantity.
    Float(f64),
    /// A 3-vector.
    Vector(Vec3),
    /// Explicitly unset (exported as `null`).
    Null,
}

impl OptionValue {
    /// Short type name used in validation messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Vector(_) => "3-vector",
            Self::Null => "null",
        }
    }

    /// Numeric view of the value: `Int` and `Float` only.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::Int(v) => Some(v as f64),
            Self::Float(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v:?}"),
            Self::Vector([x, y, z]) => write!(f, "[{x:?}, {y:?}, {z:?}]"),
            Self::Null => write!(f, "null"),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for OptionValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for OptionValue {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<u32> for OptionValue {
    fn from(v: u32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for OptionValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<f32> for OptionValue {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<Vec3> for OptionValue {
    fn from(v: Vec3) -> Self {
        Self::Vector(v)
    }
}

impl From<Option<f64>> for OptionValue {
    fn from(v: Option<f64>) -> Self {
        v.map_or(Self::Null, Self::Float)
    }
}
