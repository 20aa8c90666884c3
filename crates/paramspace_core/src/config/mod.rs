//! Parameter space configuration
//!
//! A space is fully described by its ordered axis list. `SpaceConfig` is the
//! serde-friendly form of that list; `SpaceBuilder` is the fluent form.
//!
//! ```ignore
//! use paramspace_core::config::SpaceBuilder;
//!
//! let space = SpaceBuilder::new()
//!     .linspace("x", -3.0, 3.0, 51)
//!     .linspace("y", -2.0, 2.0, 41)
//!     .unit("m")
//!     .values("y2", vec![-1.0, 0.0, 1.0])
//!     .build()?;
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{Axis, linspace};
use crate::space::ParameterSpace;

pub mod builder;

pub use builder::SpaceBuilder;

/// How the samples of an axis are given
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SampleSpec {
    Values(Vec<f64>),
    Linspace { start: f64, stop: f64, count: usize },
}

impl SampleSpec {
    pub fn samples(&self) -> Vec<f64> {
        match self {
            SampleSpec::Values(values) => values.clone(),
            SampleSpec::Linspace { start, stop, count } => linspace(*start, *stop, *count),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub samples: SampleSpec,
}

impl AxisConfig {
    pub fn to_axis(&self) -> Axis {
        Axis {
            name: self.name.clone(),
            samples: self.samples.samples(),
            unit: self.unit.clone(),
        }
    }
}

impl From<&Axis> for AxisConfig {
    fn from(axis: &Axis) -> Self {
        Self {
            name: axis.name.clone(),
            unit: axis.unit.clone(),
            samples: SampleSpec::Values(axis.samples.clone()),
        }
    }
}

/// Ordered axis list describing a parameter space
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpaceConfig {
    pub axes: Vec<AxisConfig>,
}

impl SpaceConfig {
    pub fn axes(&self) -> Vec<Axis> {
        self.axes.iter().map(AxisConfig::to_axis).collect()
    }

    pub fn build(&self) -> Result<ParameterSpace> {
        ParameterSpace::new(self.axes())
    }
}

impl From<&ParameterSpace> for SpaceConfig {
    fn from(space: &ParameterSpace) -> Self {
        Self {
            axes: space.axes().iter().map(AxisConfig::from).collect(),
        }
    }
}
