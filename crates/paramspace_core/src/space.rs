//! The grid engine: an ordered list of axes and the dense orthogonal grid
//! derived from them.
//!
//! Axis order is semantically meaningful. Axis `i` owns dimension `i` of
//! every coordinate array, every dependent array sampled from the space and
//! every index expression built against it.

use rustc_hash::FxHashMap;

use crate::error::{LookupError, Result, SpaceError};
use crate::grid::NdArray;
use crate::model::Axis;

/// An N-dimensional parameter space with an eagerly built "ij"-indexed grid.
///
/// Coordinate array `i` has shape `(len(axis_0), ..., len(axis_{d-1}))` and
/// varies only along dimension `i`.
#[derive(Debug, Clone)]
pub struct ParameterSpace {
    axes: Vec<Axis>,
    positions: FxHashMap<String, usize>,
    coordinates: Vec<NdArray<f64>>,
}

impl ParameterSpace {
    /// Build a space and its grid. Rejects an empty axis list, axes without
    /// samples and duplicated names.
    pub fn new(axes: Vec<Axis>) -> Result<Self> {
        if axes.is_empty() {
            return Err(SpaceError::NoAxes);
        }

        let mut positions = FxHashMap::default();
        for (i, axis) in axes.iter().enumerate() {
            if axis.is_empty() {
                return Err(SpaceError::EmptyAxis(axis.name.clone()));
            }
            if positions.insert(axis.name.clone(), i).is_some() {
                resolve_axis_index(&axes, &axis.name)?;
            }
        }

        let shape: Vec<usize> = axes.iter().map(Axis::len).collect();
        let coordinates = axes
            .iter()
            .enumerate()
            .map(|(dim, axis)| NdArray::from_fn(shape.clone(), |idx| axis.samples[idx[dim]]))
            .collect();

        tracing::debug!(
            axes = ?axes.iter().map(|a| a.name.as_str()).collect::<Vec<_>>(),
            shape = ?shape,
            "built parameter space grid"
        );

        Ok(Self {
            axes,
            positions,
            coordinates,
        })
    }

    /// Position of the axis called `name`
    pub fn axis_index(&self, name: &str) -> Result<usize> {
        self.positions
            .get(name)
            .copied()
            .ok_or_else(|| LookupError::AxisNotFound(name.to_string()).into())
    }

    pub fn axis_by_name(&self, name: &str) -> Result<&Axis> {
        Ok(&self.axes[self.axis_index(name)?])
    }

    /// The sample sequence of an axis
    pub fn samples_for(&self, name: &str) -> Result<&[f64]> {
        Ok(&self.axis_by_name(name)?.samples)
    }

    /// The grid-shaped coordinate array of an axis
    pub fn coordinates(&self, name: &str) -> Result<&NdArray<f64>> {
        Ok(&self.coordinates[self.axis_index(name)?])
    }

    /// Coordinate array of the axis at `position`
    pub fn coordinates_at(&self, position: usize) -> &NdArray<f64> {
        &self.coordinates[position]
    }

    pub fn dimension_count(&self) -> usize {
        self.axes.len()
    }

    pub fn axis_names(&self) -> Vec<&str> {
        self.axes.iter().map(|a| a.name.as_str()).collect()
    }

    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    pub fn axis(&self, position: usize) -> &Axis {
        &self.axes[position]
    }

    /// Shape shared by every coordinate array
    pub fn shape(&self) -> Vec<usize> {
        self.axes.iter().map(Axis::len).collect()
    }

    /// Number of grid points
    pub fn total_points(&self) -> usize {
        self.axes.iter().map(Axis::len).product()
    }
}

/// Resolve `name` against a raw axis list by scanning it. The name must
/// occur exactly once.
pub fn resolve_axis_index(axes: &[Axis], name: &str) -> std::result::Result<usize, LookupError> {
    match positions_of(axes, name).as_slice() {
        [] => Err(LookupError::AxisNotFound(name.to_string())),
        [single] => Ok(*single),
        many => Err(LookupError::AxisDuplicated {
            name: name.to_string(),
            positions: many.to_vec(),
        }),
    }
}

fn positions_of(axes: &[Axis], name: &str) -> Vec<usize> {
    axes.iter()
        .enumerate()
        .filter(|(_, a)| a.name == name)
        .map(|(i, _)| i)
        .collect()
}
