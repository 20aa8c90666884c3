//! Fluent construction of parameter spaces

use crate::error::Result;
use crate::model::Axis;
use crate::space::ParameterSpace;

/// Builder for a [`ParameterSpace`]. Axes are declared in call order;
/// `unit` applies to the most recently declared axis.
#[derive(Debug, Clone, Default)]
pub struct SpaceBuilder {
    axes: Vec<Axis>,
}

impl SpaceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn axis(mut self, axis: Axis) -> Self {
        self.axes.push(axis);
        self
    }

    pub fn linspace(self, name: impl Into<String>, start: f64, stop: f64, count: usize) -> Self {
        self.axis(Axis::linspace(name, start, stop, count))
    }

    pub fn values(self, name: impl Into<String>, samples: Vec<f64>) -> Self {
        self.axis(Axis::new(name, samples))
    }

    /// Set the unit of the last declared axis
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        if let Some(axis) = self.axes.last_mut() {
            axis.unit = Some(unit.into());
        }
        self
    }

    pub fn build(self) -> Result<ParameterSpace> {
        ParameterSpace::new(self.axes)
    }
}
