//! Projection planning: choose two free axes for a 2-D cross-section and pin
//! every other axis to a grid index.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpaceError};
use crate::grid::AxisSelector;
use crate::model::NamedValues;
use crate::space::ParameterSpace;

/// Ordered `(axis name, optional pinned value)` entries.
///
/// The first two entries are the free axes; their values are ignored. Later
/// entries pin their axis to the sample nearest to the value, or to the
/// first sample when no value is given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRequest {
    entries: Vec<(String, Option<f64>)>,
}

impl ProjectionRequest {
    /// Request with the two free axes
    pub fn new(x_axis: impl Into<String>, y_axis: impl Into<String>) -> Self {
        Self {
            entries: vec![(x_axis.into(), None), (y_axis.into(), None)],
        }
    }

    pub fn from_entries(entries: Vec<(String, Option<f64>)>) -> Self {
        Self { entries }
    }

    /// Append a pinned axis
    #[must_use]
    pub fn pin(mut self, name: impl Into<String>, value: Option<f64>) -> Self {
        self.entries.push((name.into(), value));
        self
    }

    /// Copy of this request with `name` pinned to `value`. An existing entry
    /// keeps its position; otherwise the entry is appended.
    #[must_use]
    pub fn with_pin(&self, name: &str, value: f64) -> Self {
        let mut entries = self.entries.clone();
        match entries.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = Some(value),
            None => entries.push((name.to_string(), Some(value))),
        }
        Self { entries }
    }

    pub fn entries(&self) -> &[(String, Option<f64>)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<&NamedValues> for ProjectionRequest {
    fn from(values: &NamedValues) -> Self {
        Self {
            entries: values
                .iter()
                .map(|(name, value)| (name.to_string(), Some(value)))
                .collect(),
        }
    }
}

/// Result of planning a projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    /// One selector per declared axis
    index: Vec<AxisSelector>,
    /// Axis positions: free axes first, then pinned axes in resolution order
    ordered: Vec<usize>,
}

impl Projection {
    pub fn index_expression(&self) -> &[AxisSelector] {
        &self.index
    }

    pub fn selector(&self, position: usize) -> AxisSelector {
        self.index[position]
    }

    pub fn ordered_axes(&self) -> &[usize] {
        &self.ordered
    }

    /// Positions of the two free axes, in request order
    pub fn free_axes(&self) -> (usize, usize) {
        (self.ordered[0], self.ordered[1])
    }

    pub fn pinned_axes(&self) -> &[usize] {
        &self.ordered[2..]
    }

    pub fn ordered_names<'a>(&self, space: &'a ParameterSpace) -> Vec<&'a str> {
        self.ordered
            .iter()
            .map(|&p| space.axis(p).name.as_str())
            .collect()
    }
}

/// Plan a projection of `space` for `request`.
pub fn plan(space: &ParameterSpace, request: &ProjectionRequest) -> Result<Projection> {
    let entries = request.entries();
    if entries.len() < 2 {
        return Err(SpaceError::TooFewProjectionAxes {
            given: entries.len(),
        });
    }

    let mut slots: Vec<Option<AxisSelector>> = vec![None; space.dimension_count()];
    let mut ordered = Vec::with_capacity(space.dimension_count());

    for (j, (name, value)) in entries.iter().enumerate() {
        let position = space.axis_index(name)?;
        if slots[position].is_some() {
            return Err(SpaceError::RepeatedProjectionAxis(name.clone()));
        }

        let selector = if j < 2 {
            AxisSelector::All
        } else {
            match value {
                Some(v) => {
                    let idx = space.axis(position).nearest_index(*v);
                    tracing::trace!(axis = %name, requested = *v, index = idx, "pinned to nearest sample");
                    AxisSelector::At(idx)
                }
                None => AxisSelector::At(0),
            }
        };
        slots[position] = Some(selector);
        ordered.push(position);
    }

    for (position, slot) in slots.iter_mut().enumerate() {
        if slot.is_none() {
            *slot = Some(AxisSelector::At(0));
            ordered.push(position);
        }
    }

    let index: Vec<AxisSelector> = slots.into_iter().flatten().collect();
    tracing::debug!(index = ?index, ordered = ?ordered, "planned projection");

    Ok(Projection { index, ordered })
}
