//! Reading named grid coordinates back out of dependent arrays.

use crate::dependent::DependentArray;
use crate::error::{Result, SpaceError};
use crate::model::NamedValues;
use crate::space::ParameterSpace;

/// An element of a dependent array together with where it sits on the grid
#[derive(Debug, Clone, PartialEq)]
pub struct Located {
    /// Multi-index into the dependent array
    pub indices: Vec<usize>,
    pub value: f64,
    /// Coordinates of the axes the dependent array spans
    pub coordinates: NamedValues,
}

/// Coordinates of the grid point at `indices` of `dependent`. Only the axes
/// the array still spans are reported, in declaration order.
pub fn values_at(
    space: &ParameterSpace,
    dependent: &DependentArray,
    indices: &[usize],
) -> Result<NamedValues> {
    if dependent.values().flat_index(indices).is_none() {
        return Err(SpaceError::IndexOutOfBounds {
            indices: indices.to_vec(),
            shape: dependent.shape().to_vec(),
        });
    }

    let mut values = NamedValues::new();
    for (name, &i) in dependent.remaining_axes().iter().zip(indices) {
        values.push(name.clone(), space.samples_for(name)?[i]);
    }
    Ok(values)
}

/// Smallest element of `dependent`. NaN entries are skipped; the first
/// occurrence wins on ties.
pub fn locate_min(space: &ParameterSpace, dependent: &DependentArray) -> Result<Located> {
    locate_by(space, dependent, |candidate, best| candidate < best)
}

/// Largest element of `dependent`. NaN entries are skipped; the first
/// occurrence wins on ties.
pub fn locate_max(space: &ParameterSpace, dependent: &DependentArray) -> Result<Located> {
    locate_by(space, dependent, |candidate, best| candidate > best)
}

fn locate_by(
    space: &ParameterSpace,
    dependent: &DependentArray,
    better: impl Fn(f64, f64) -> bool,
) -> Result<Located> {
    let mut best: Option<(usize, f64)> = None;
    for (flat, &value) in dependent.values().data().iter().enumerate() {
        if value.is_nan() {
            continue;
        }
        if best.is_none_or(|(_, b)| better(value, b)) {
            best = Some((flat, value));
        }
    }

    let (flat, value) = best.ok_or(SpaceError::EmptyArray)?;
    let indices = dependent
        .values()
        .multi_index(flat)
        .ok_or(SpaceError::EmptyArray)?;
    let coordinates = values_at(space, dependent, &indices)?;

    tracing::debug!(value, coordinates = ?coordinates, "located extreme grid point");
    Ok(Located {
        indices,
        value,
        coordinates,
    })
}
