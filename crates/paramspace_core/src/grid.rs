//! Dense N-dimensional arrays with a flat backing store.
//!
//! `NdArray<T>` stores values in row-major order (the last dimension varies
//! fastest) and addresses them through precomputed strides. Coordinate
//! arrays of a [`ParameterSpace`](crate::space::ParameterSpace) and every
//! dependent array are `NdArray<f64>`.
//!
//! Orthogonal selection takes one [`AxisSelector`] per dimension: `All`
//! keeps the dimension, `At(i)` fixes it and drops it from the result.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpaceError};

/// One entry of an index expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisSelector {
    /// Keep every index along the dimension
    All,
    /// Fix the dimension to a single index
    At(usize),
}

impl AxisSelector {
    pub fn is_all(&self) -> bool {
        matches!(self, AxisSelector::All)
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            AxisSelector::All => None,
            AxisSelector::At(i) => Some(*i),
        }
    }
}

/// N-dimensional array with flat backing storage and stride-based indexing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NdArray<T> {
    /// The data stored in row-major order
    data: Vec<T>,
    /// Extent of each dimension (e.g., [51, 41, 31])
    shape: Vec<usize>,
    /// Precomputed strides for index calculation
    strides: Vec<usize>,
}

impl<T: Clone> NdArray<T> {
    /// Create a new array with the given shape, filled with `fill`.
    pub fn new(shape: Vec<usize>, fill: T) -> Self {
        let total_size: usize = shape.iter().product();
        let strides = compute_strides(&shape);
        Self {
            data: vec![fill; total_size],
            shape,
            strides,
        }
    }

    /// Create an array from existing data. Data must be in row-major order.
    pub fn from_data(shape: Vec<usize>, data: Vec<T>) -> Option<Self> {
        let total_size: usize = shape.iter().product();
        if data.len() != total_size {
            return None;
        }
        let strides = compute_strides(&shape);
        Some(Self {
            data,
            shape,
            strides,
        })
    }

    /// Build an array by evaluating `f` at every multi-index.
    pub fn from_fn(shape: Vec<usize>, mut f: impl FnMut(&[usize]) -> T) -> Self {
        let strides = compute_strides(&shape);
        let data = GridIndices::new(&shape).map(|idx| f(&idx)).collect();
        Self {
            data,
            shape,
            strides,
        }
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Convert multi-dimensional indices to flat index
    pub fn flat_index(&self, indices: &[usize]) -> Option<usize> {
        if indices.len() != self.shape.len() {
            return None;
        }
        let mut flat = 0;
        for (i, (&idx, &size)) in indices.iter().zip(&self.shape).enumerate() {
            if idx >= size {
                return None;
            }
            flat += idx * self.strides[i];
        }
        Some(flat)
    }

    /// Convert flat index to multi-dimensional indices
    pub fn multi_index(&self, flat: usize) -> Option<Vec<usize>> {
        if flat >= self.data.len() {
            return None;
        }
        let mut indices = Vec::with_capacity(self.shape.len());
        let mut remaining = flat;
        for &stride in &self.strides {
            indices.push(remaining / stride);
            remaining %= stride;
        }
        Some(indices)
    }

    pub fn get(&self, indices: &[usize]) -> Option<&T> {
        self.flat_index(indices).map(|i| &self.data[i])
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    /// Iterate over all indices in row-major order
    pub fn indices(&self) -> GridIndices {
        GridIndices::new(&self.shape)
    }

    /// Iterate over (indices, value) pairs
    pub fn iter(&self) -> impl Iterator<Item = (Vec<usize>, &T)> {
        self.indices().zip(self.data.iter())
    }

    /// Orthogonal selection. Dimensions marked `All` are kept in their
    /// original order; dimensions marked `At(i)` are fixed and dropped.
    pub fn select(&self, selectors: &[AxisSelector]) -> Result<NdArray<T>> {
        if selectors.len() != self.ndim() {
            // Rank disagreement: report the ranks
            return Err(SpaceError::ShapeMismatch {
                expected: vec![self.ndim()],
                found: vec![selectors.len()],
            });
        }

        let mut base = vec![0usize; self.ndim()];
        let mut kept = Vec::new();
        for (dim, selector) in selectors.iter().enumerate() {
            match *selector {
                AxisSelector::All => kept.push(dim),
                AxisSelector::At(i) if i < self.shape[dim] => base[dim] = i,
                AxisSelector::At(_) => {
                    return Err(SpaceError::IndexOutOfBounds {
                        indices: selectors.iter().map(|s| s.index().unwrap_or(0)).collect(),
                        shape: self.shape.clone(),
                    });
                }
            }
        }

        let out_shape: Vec<usize> = kept.iter().map(|&d| self.shape[d]).collect();
        Ok(NdArray::from_fn(out_shape, |out_idx| {
            let mut src = base.clone();
            for (&dim, &i) in kept.iter().zip(out_idx) {
                src[dim] = i;
            }
            self.data[flat(&src, &self.strides)].clone()
        }))
    }

    /// Collapse dimension `axis` by applying `f` to every 1-D lane along it.
    /// The result has that dimension removed.
    pub fn reduce_axis<U: Clone>(&self, axis: usize, mut f: impl FnMut(&[T]) -> U) -> NdArray<U> {
        assert!(axis < self.ndim(), "axis {axis} out of range for {:?}", self.shape);

        let mut out_shape = self.shape.clone();
        let lane_len = out_shape.remove(axis);
        let mut lane = Vec::with_capacity(lane_len);

        NdArray::from_fn(out_shape, |out_idx| {
            let mut src: Vec<usize> = out_idx.to_vec();
            src.insert(axis, 0);
            lane.clear();
            for i in 0..lane_len {
                src[axis] = i;
                lane.push(self.data[flat(&src, &self.strides)].clone());
            }
            f(&lane)
        })
    }
}

/// Compute strides for row-major order
fn compute_strides(shape: &[usize]) -> Vec<usize> {
    if shape.is_empty() {
        return Vec::new();
    }
    let mut strides = vec![1; shape.len()];
    for i in (0..shape.len() - 1).rev() {
        strides[i] = strides[i + 1] * shape[i + 1];
    }
    strides
}

fn flat(indices: &[usize], strides: &[usize]) -> usize {
    indices.iter().zip(strides).map(|(i, s)| i * s).sum()
}

/// Iterator over all indices of a shape in row-major order
pub struct GridIndices {
    shape: Vec<usize>,
    current: Vec<usize>,
    done: bool,
}

impl GridIndices {
    pub fn new(shape: &[usize]) -> Self {
        Self {
            shape: shape.to_vec(),
            current: vec![0; shape.len()],
            done: shape.contains(&0),
        }
    }
}

impl Iterator for GridIndices {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.current.clone();

        // A zero-dimensional shape has exactly one (empty) index
        if self.shape.is_empty() {
            self.done = true;
        }

        // Increment indices (row-major: last dimension varies fastest)
        for i in (0..self.shape.len()).rev() {
            self.current[i] += 1;
            if self.current[i] < self.shape[i] {
                break;
            }
            self.current[i] = 0;
            if i == 0 {
                self.done = true;
            }
        }

        Some(result)
    }
}
