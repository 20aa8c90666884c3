//! Sampling functions over the grid and reducing dependent arrays.

use crate::dependent::DependentArray;
use crate::error::{Result, SpaceError};
use crate::grid::NdArray;
use crate::space::ParameterSpace;

/// Evaluate `f` at every grid point.
///
/// `f` receives the coordinates of the axes in `axis_names`, in that order.
/// The result spans every axis of the space.
pub fn sample<F>(space: &ParameterSpace, axis_names: &[&str], f: F) -> Result<DependentArray>
where
    F: Fn(&[f64]) -> f64,
{
    if axis_names.is_empty() {
        return Err(SpaceError::NothingSampled);
    }

    let arrays = axis_names
        .iter()
        .map(|name| space.coordinates(name))
        .collect::<Result<Vec<_>>>()?;

    let shape = arrays[0].shape();
    if let Some(other) = arrays.iter().find(|a| a.shape() != shape) {
        return Err(SpaceError::ShapeMismatch {
            expected: shape.to_vec(),
            found: other.shape().to_vec(),
        });
    }

    let mut args = vec![0.0; arrays.len()];
    let data = (0..arrays[0].len())
        .map(|flat| {
            for (arg, arr) in args.iter_mut().zip(&arrays) {
                *arg = arr.data()[flat];
            }
            f(&args)
        })
        .collect();

    let values = NdArray::from_data(shape.to_vec(), data).ok_or(SpaceError::ShapeMismatch {
        expected: shape.to_vec(),
        found: vec![arrays[0].len()],
    })?;
    DependentArray::full(space, values)
}

/// Integrate `dependent` along `axis_name` with the trapezoidal rule, using
/// the axis samples as the integration variable. The axis is removed from
/// the result.
pub fn integrate(
    space: &ParameterSpace,
    dependent: &DependentArray,
    axis_name: &str,
) -> Result<DependentArray> {
    let samples = space.samples_for(axis_name)?;
    let dim = dependent
        .dimension_of(axis_name)
        .ok_or_else(|| SpaceError::AxisEliminated(axis_name.to_string()))?;

    let values = dependent
        .values()
        .reduce_axis(dim, |lane| trapezoid(samples, lane));

    let mut axes = dependent.remaining_axes().to_vec();
    axes.remove(dim);

    tracing::debug!(
        axis = axis_name,
        remaining = ?axes,
        shape = ?values.shape(),
        "integrated out axis"
    );
    Ok(DependentArray::from_parts(values, axes))
}

/// Trapezoidal rule over paired `x`/`y` samples. Fewer than two points
/// integrate to zero.
pub fn trapezoid(x: &[f64], y: &[f64]) -> f64 {
    x.windows(2)
        .zip(y.windows(2))
        .map(|(xs, ys)| 0.5 * (xs[1] - xs[0]) * (ys[0] + ys[1]))
        .sum()
}
