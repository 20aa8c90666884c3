//! Arrays computed over a parameter space.
//!
//! A `DependentArray` carries the names of the axes it still spans, in
//! declaration order. Reductions remove names; slicing derives its index
//! expression from them instead of assuming which axes were eliminated.

use crate::error::{Result, SpaceError};
use crate::grid::NdArray;
use crate::space::ParameterSpace;

#[derive(Debug, Clone, PartialEq)]
pub struct DependentArray {
    values: NdArray<f64>,
    axes: Vec<String>,
}

impl DependentArray {
    /// Attach axis names to `values`. The names must exist in `space`, be
    /// listed in declaration order, and their lengths must match the shape.
    pub fn new(space: &ParameterSpace, values: NdArray<f64>, axes: Vec<String>) -> Result<Self> {
        let mut last = None;
        let mut expected = Vec::with_capacity(axes.len());
        for name in &axes {
            let position = space.axis_index(name)?;
            if last.is_some_and(|prev| position <= prev) {
                return Err(SpaceError::AxisOutOfOrder(name.clone()));
            }
            last = Some(position);
            expected.push(space.axis(position).len());
        }

        if values.shape() != expected.as_slice() {
            return Err(SpaceError::ShapeMismatch {
                expected,
                found: values.shape().to_vec(),
            });
        }
        Ok(Self { values, axes })
    }

    /// Array spanning every axis of `space`
    pub fn full(space: &ParameterSpace, values: NdArray<f64>) -> Result<Self> {
        let axes = space.axis_names().into_iter().map(String::from).collect();
        Self::new(space, values, axes)
    }

    /// Attach names to an array reduced outside this crate, assuming the
    /// eliminated axes were the leading ones in declaration order.
    pub fn from_leading_reduction(space: &ParameterSpace, values: NdArray<f64>) -> Result<Self> {
        let d = space.dimension_count();
        if values.ndim() > d {
            return Err(SpaceError::ShapeMismatch {
                expected: space.shape(),
                found: values.shape().to_vec(),
            });
        }
        let axes = space.axis_names()[d - values.ndim()..]
            .iter()
            .map(|s| s.to_string())
            .collect();
        Self::new(space, values, axes)
    }

    pub(crate) fn from_parts(values: NdArray<f64>, axes: Vec<String>) -> Self {
        debug_assert_eq!(values.ndim(), axes.len());
        Self { values, axes }
    }

    pub fn values(&self) -> &NdArray<f64> {
        &self.values
    }

    pub fn into_values(self) -> NdArray<f64> {
        self.values
    }

    /// Names of the axes this array still spans
    pub fn remaining_axes(&self) -> &[String] {
        &self.axes
    }

    /// Dimension of `name` within this array
    pub fn dimension_of(&self, name: &str) -> Option<usize> {
        self.axes.iter().position(|a| a == name)
    }

    pub fn spans(&self, name: &str) -> bool {
        self.dimension_of(name).is_some()
    }

    pub fn ndim(&self) -> usize {
        self.values.ndim()
    }

    pub fn shape(&self) -> &[usize] {
        self.values.shape()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Axis;

    fn space() -> ParameterSpace {
        ParameterSpace::new(vec![
            Axis::linspace("x", 0.0, 1.0, 4),
            Axis::linspace("y", 0.0, 1.0, 3),
            Axis::linspace("z", 0.0, 1.0, 2),
        ])
        .unwrap()
    }

    #[test]
    fn test_full_spans_every_axis() {
        let space = space();
        let arr = DependentArray::full(&space, NdArray::new(space.shape(), 0.0)).unwrap();
        assert_eq!(arr.remaining_axes(), &["x", "y", "z"]);
        assert_eq!(arr.dimension_of("z"), Some(2));
    }

    #[test]
    fn test_shape_must_match_named_axes() {
        let space = space();
        let err = DependentArray::new(
            &space,
            NdArray::new(vec![3, 4], 0.0),
            vec!["x".into(), "y".into()],
        )
        .unwrap_err();
        assert_eq!(
            err,
            SpaceError::ShapeMismatch {
                expected: vec![4, 3],
                found: vec![3, 4],
            }
        );
    }

    #[test]
    fn test_names_must_follow_declaration_order() {
        let space = space();
        let result = DependentArray::new(
            &space,
            NdArray::new(vec![3, 4], 0.0),
            vec!["y".into(), "x".into()],
        );
        assert_eq!(result, Err(SpaceError::AxisOutOfOrder("x".into())));
    }

    #[test]
    fn test_leading_reduction_assumes_front_elimination() {
        let space = space();
        let arr = DependentArray::from_leading_reduction(&space, NdArray::new(vec![3, 2], 1.0))
            .unwrap();
        assert_eq!(arr.remaining_axes(), &["y", "z"]);
        assert!(!arr.spans("x"));
    }
}
