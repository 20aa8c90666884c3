//! Cutting plot-ready slices out of dependent arrays.
//!
//! The projection's index expression is stated against every declared
//! axis. A dependent array that lost axes to reductions is indexed with the
//! selectors of the axes it still spans, looked up by name.

use crate::dependent::DependentArray;
use crate::error::{Result, SpaceError};
use crate::grid::{AxisSelector, NdArray};
use crate::model::NamedValues;
use crate::projection::Projection;
use crate::space::ParameterSpace;

/// Coordinate and value arrays of a 2-D cross-section. All three arrays
/// have the same rank-2 shape.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSlice {
    pub x: NdArray<f64>,
    pub y: NdArray<f64>,
    pub z: NdArray<f64>,
    /// Position of the axis plotted along x
    pub x_axis: usize,
    /// Position of the axis plotted along y
    pub y_axis: usize,
}

/// Values of a dependent array along a single axis
#[derive(Debug, Clone, PartialEq)]
pub struct LineSlice {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub axis: usize,
}

pub fn slice_for_plot(
    space: &ParameterSpace,
    projection: &Projection,
    dependent: &DependentArray,
) -> Result<PlotSlice> {
    let (x_axis, y_axis) = projection.free_axes();
    let index = projection.index_expression();

    let x = space.coordinates_at(x_axis).select(index)?;
    let y = space.coordinates_at(y_axis).select(index)?;

    let x_name = space.axis(x_axis).name.as_str();
    let y_name = space.axis(y_axis).name.as_str();
    for name in [x_name, y_name] {
        if !dependent.spans(name) {
            return Err(SpaceError::AxisEliminated(name.to_string()));
        }
    }

    let z = if dependent.ndim() == 2 {
        tracing::debug!("dependent array already spans exactly the free axes");
        dependent.values().clone()
    } else {
        let selectors = dependent
            .remaining_axes()
            .iter()
            .map(|name| Ok(projection.selector(space.axis_index(name)?)))
            .collect::<Result<Vec<AxisSelector>>>()?;
        tracing::debug!(
            remaining = ?dependent.remaining_axes(),
            selectors = ?selectors,
            "slicing reduced dependent array"
        );
        dependent.values().select(&selectors)?
    };

    for arr in [&y, &z] {
        if arr.shape() != x.shape() {
            return Err(SpaceError::ShapeMismatch {
                expected: x.shape().to_vec(),
                found: arr.shape().to_vec(),
            });
        }
    }
    if x.ndim() != 2 {
        return Err(SpaceError::ShapeMismatch {
            expected: vec![x.len()],
            found: x.shape().to_vec(),
        });
    }

    Ok(PlotSlice {
        x,
        y,
        z,
        x_axis,
        y_axis,
    })
}

/// Values of `dependent` along `axis_name`. Every other axis the array
/// spans is pinned to the sample nearest to its entry in `pins`, or to its
/// first sample.
pub fn slice_for_line(
    space: &ParameterSpace,
    dependent: &DependentArray,
    axis_name: &str,
    pins: &NamedValues,
) -> Result<LineSlice> {
    let axis = space.axis_index(axis_name)?;
    if !dependent.spans(axis_name) {
        return Err(SpaceError::AxisEliminated(axis_name.to_string()));
    }

    let selectors = dependent
        .remaining_axes()
        .iter()
        .map(|name| {
            if name == axis_name {
                return Ok(AxisSelector::All);
            }
            let other = space.axis_by_name(name)?;
            Ok(AxisSelector::At(
                pins.get(name).map_or(0, |v| other.nearest_index(v)),
            ))
        })
        .collect::<Result<Vec<_>>>()?;

    let y = dependent.values().select(&selectors)?.into_data();
    Ok(LineSlice {
        x: space.axis(axis).samples.clone(),
        y,
        axis,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Axis;
    use crate::operators::{integrate, sample};
    use crate::projection::{ProjectionRequest, plan};

    fn space() -> ParameterSpace {
        ParameterSpace::new(vec![
            Axis::linspace("a", 0.0, 1.0, 3),
            Axis::linspace("b", 0.0, 1.0, 4),
            Axis::linspace("c", 0.0, 1.0, 5),
        ])
        .unwrap()
    }

    fn encoded(space: &ParameterSpace) -> DependentArray {
        // distinct value at every grid point
        sample(space, &["a", "b", "c"], |v| v[0] * 100.0 + v[1] * 10.0 + v[2]).unwrap()
    }

    #[test]
    fn test_full_array_slice_matches_pins() {
        let space = space();
        let dep = encoded(&space);
        let request = ProjectionRequest::new("c", "a").pin("b", Some(0.7));
        let projection = plan(&space, &request).unwrap();
        let slice = slice_for_plot(&space, &projection, &dep).unwrap();

        assert_eq!(slice.x.shape(), &[3, 5]);
        assert_eq!(slice.x_axis, 2);
        assert_eq!(slice.y_axis, 0);
        // b = 0.7 snaps to index 2 (2/3)
        for (idx, &z) in slice.z.iter() {
            assert_eq!(Some(&z), dep.values().get(&[idx[0], 2, idx[1]]));
        }
        assert_eq!(slice.x.get(&[1, 4]), Some(&1.0));
        assert_eq!(slice.y.get(&[1, 4]), Some(&0.5));
    }

    #[test]
    fn test_reduced_array_used_directly() {
        let space = space();
        let dep = encoded(&space);
        let reduced = integrate(&space, &dep, "a").unwrap();
        let projection = plan(&space, &ProjectionRequest::new("c", "b")).unwrap();

        let slice = slice_for_plot(&space, &projection, &reduced).unwrap();
        assert_eq!(slice.z, *reduced.values());
        assert_eq!(slice.x.shape(), &[4, 5]);
    }

    #[test]
    fn test_reduced_non_leading_axis_uses_named_selectors() {
        let four = ParameterSpace::new(vec![
            Axis::linspace("a", 0.0, 1.0, 3),
            Axis::linspace("b", 0.0, 1.0, 4),
            Axis::linspace("c", 0.0, 1.0, 5),
            Axis::linspace("d", 0.0, 1.0, 2),
        ])
        .unwrap();
        let dep4 = sample(&four, &["a", "b", "c", "d"], |v| {
            v[0] + 2.0 * v[1] + 4.0 * v[2] + 8.0 * v[3]
        })
        .unwrap();

        // drop "b", then plot a over d with c pinned to its last sample
        let reduced = integrate(&four, &dep4, "b").unwrap();
        assert_eq!(reduced.remaining_axes(), &["a", "c", "d"]);
        let request = ProjectionRequest::new("a", "d").pin("c", Some(1.0));
        let projection = plan(&four, &request).unwrap();
        let slice = slice_for_plot(&four, &projection, &reduced).unwrap();

        assert_eq!(slice.z.shape(), &[3, 2]);
        for (idx, &z) in slice.z.iter() {
            assert_eq!(Some(&z), reduced.values().get(&[idx[0], 4, idx[1]]));
        }
    }

    #[test]
    fn test_eliminated_free_axis_is_rejected() {
        let space = space();
        let reduced = integrate(&space, &encoded(&space), "a").unwrap();
        let projection = plan(&space, &ProjectionRequest::new("a", "b")).unwrap();
        assert_eq!(
            slice_for_plot(&space, &projection, &reduced).unwrap_err(),
            SpaceError::AxisEliminated("a".into())
        );
    }

    #[test]
    fn test_line_slice_pins_other_axes() {
        let space = space();
        let dep = encoded(&space);
        let pins: NamedValues = [("a", 1.0)].into_iter().collect();
        let line = slice_for_line(&space, &dep, "b", &pins).unwrap();

        assert_eq!(line.axis, 1);
        assert_eq!(line.x, space.axis(1).samples);
        assert_eq!(line.y.len(), 4);
        for (i, y) in line.y.iter().enumerate() {
            assert_eq!(Some(y), dep.values().get(&[2, i, 0]));
        }
    }
}
