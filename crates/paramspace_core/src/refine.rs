//! Refining sample sequences around a located point.
//!
//! A coarse sweep locates a point of interest (e.g. with
//! [`locate_min`](crate::locate::locate_min)); `refine` then builds finer,
//! uniformly spaced samples around it for the axes named in the update
//! specs. The source space is never modified.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpaceError};
use crate::model::{Axis, NamedValues, linspace};
use crate::space::ParameterSpace;

/// Window around a center value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CenterInterval {
    /// `[center - half_width, center + half_width]`
    Symmetric(f64),
    /// `[center + low, center + high]`
    Offsets { low: f64, high: f64 },
    /// Offsets given in percent of the center value
    Percent { low: f64, high: f64 },
}

impl CenterInterval {
    /// Absolute `(low, high)` offsets for a window around `center`
    fn offsets(&self, center: f64) -> (f64, f64) {
        match *self {
            CenterInterval::Symmetric(half_width) => (-half_width, half_width),
            CenterInterval::Offsets { low, high } => (low, high),
            CenterInterval::Percent { low, high } => {
                let scale = center / 100.0;
                (low * scale, high * scale)
            }
        }
    }
}

/// New samples for one axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisUpdate {
    pub axis: String,
    pub interval: CenterInterval,
    pub sample_count: usize,
}

impl AxisUpdate {
    pub fn new(axis: impl Into<String>, interval: CenterInterval, sample_count: usize) -> Self {
        Self {
            axis: axis.into(),
            interval,
            sample_count,
        }
    }
}

/// `count` uniformly spaced values over the window `interval` around `center`.
pub fn linspace_around(center: f64, interval: CenterInterval, count: usize) -> Vec<f64> {
    let (low, high) = interval.offsets(center);
    linspace(center + low, center + high, count)
}

/// Copies of the axes of `space` where every axis named in `updates` gets
/// new samples centered on its value in `located`.
pub fn refine(
    space: &ParameterSpace,
    located: &NamedValues,
    updates: &[AxisUpdate],
) -> Result<Vec<Axis>> {
    for update in updates {
        space.axis_index(&update.axis)?;
        match update.interval {
            CenterInterval::Symmetric(half_width) if half_width.is_nan() || half_width < 0.0 => {
                return Err(SpaceError::NegativeHalfWidth {
                    axis: update.axis.clone(),
                    half_width,
                });
            }
            _ => {}
        }
        if update.sample_count == 0 {
            return Err(SpaceError::InvalidSampleCount {
                axis: update.axis.clone(),
            });
        }
    }

    let mut axes = space.axes().to_vec();
    for axis in &mut axes {
        for update in updates.iter().filter(|u| u.axis == axis.name) {
            let center = located
                .get(&axis.name)
                .ok_or_else(|| SpaceError::MissingLocatedValue(axis.name.clone()))?;
            axis.samples = linspace_around(center, update.interval, update.sample_count);
            tracing::info!(
                axis = %axis.name,
                center,
                first = axis.samples[0],
                last = axis.samples[axis.samples.len() - 1],
                count = update.sample_count,
                "refined axis samples"
            );
        }
    }
    Ok(axes)
}

impl ParameterSpace {
    /// A new space whose axes are refined around `located`
    pub fn refined(&self, located: &NamedValues, updates: &[AxisUpdate]) -> Result<Self> {
        ParameterSpace::new(refine(self, located, updates)?)
    }
}
