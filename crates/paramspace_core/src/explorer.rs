//! Interactive exploration of a dependent array.
//!
//! The explorer owns the current projection request. A value-change event
//! from a UI control snaps the raw value to the grid, updates the request and
//! redraws through [`recompute`], which is a pure function of its inputs.

use crate::dependent::DependentArray;
use crate::error::Result;
use crate::grid::NdArray;
use crate::projection::{Projection, ProjectionRequest, plan};
use crate::slicer::{PlotSlice, slice_for_plot};
use crate::space::ParameterSpace;

/// Draws a 2-D color plot. `x`, `y` and `z` always share one rank-2 shape.
pub trait HeatmapRenderer {
    fn render_heatmap(
        &mut self,
        x: &NdArray<f64>,
        y: &NdArray<f64>,
        z: &NdArray<f64>,
        x_label: &str,
        y_label: &str,
        value_label: &str,
    );
}

/// Receives requests to move a UI control to a grid value
pub trait ControlSink {
    fn set_control_value(&mut self, axis: &str, value: f64);
}

/// A continuous control for one pinned axis
#[derive(Debug, Clone, PartialEq)]
pub struct ControlSpec {
    pub axis: String,
    pub min: f64,
    pub max: f64,
    /// Sample the axis is currently pinned to
    pub initial: f64,
}

/// Outcome of a control event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisValueChange {
    pub raw: f64,
    pub snapped: f64,
    pub index: usize,
}

/// Plan `request` and slice `dependent` accordingly.
pub fn recompute(
    space: &ParameterSpace,
    dependent: &DependentArray,
    request: &ProjectionRequest,
) -> Result<(Projection, PlotSlice)> {
    let projection = plan(space, request)?;
    let slice = slice_for_plot(space, &projection, dependent)?;
    Ok((projection, slice))
}

#[derive(Debug, Clone)]
pub struct Explorer {
    space: ParameterSpace,
    dependent: DependentArray,
    request: ProjectionRequest,
    value_label: String,
}

impl Explorer {
    /// Fails when `request` cannot be projected onto `dependent`.
    pub fn new(
        space: ParameterSpace,
        dependent: DependentArray,
        request: ProjectionRequest,
        value_label: impl Into<String>,
    ) -> Result<Self> {
        recompute(&space, &dependent, &request)?;
        Ok(Self {
            space,
            dependent,
            request,
            value_label: value_label.into(),
        })
    }

    pub fn space(&self) -> &ParameterSpace {
        &self.space
    }

    pub fn dependent(&self) -> &DependentArray {
        &self.dependent
    }

    pub fn request(&self) -> &ProjectionRequest {
        &self.request
    }

    /// One control per pinned axis the dependent array still spans, in
    /// projection order.
    pub fn controls(&self) -> Result<Vec<ControlSpec>> {
        let projection = plan(&self.space, &self.request)?;
        Ok(projection
            .pinned_axes()
            .iter()
            .copied()
            .filter(|&p| self.dependent.spans(&self.space.axis(p).name))
            .map(|p| {
                let axis = self.space.axis(p);
                let index = projection.selector(p).index().unwrap_or(0);
                ControlSpec {
                    axis: axis.name.clone(),
                    min: axis.min(),
                    max: axis.max(),
                    initial: axis.samples[index],
                }
            })
            .collect())
    }

    /// Draw the current projection
    pub fn render(&self, renderer: &mut impl HeatmapRenderer) -> Result<PlotSlice> {
        let (_, slice) = recompute(&self.space, &self.dependent, &self.request)?;
        self.draw(&slice, renderer);
        Ok(slice)
    }

    fn draw(&self, slice: &PlotSlice, renderer: &mut impl HeatmapRenderer) {
        renderer.render_heatmap(
            &slice.x,
            &slice.y,
            &slice.z,
            &self.space.axis(slice.x_axis).label(),
            &self.space.axis(slice.y_axis).label(),
            &self.value_label,
        );
    }

    /// Respond to a control moving `axis` to `raw`: snap to the nearest
    /// sample, reset the control when the raw value is off-grid, pin the axis
    /// and redraw.
    pub fn on_axis_value_changed(
        &mut self,
        axis: &str,
        raw: f64,
        renderer: &mut impl HeatmapRenderer,
        controls: &mut impl ControlSink,
    ) -> Result<AxisValueChange> {
        let target = self.space.axis_by_name(axis)?;
        let index = target.nearest_index(raw);
        let snapped = target.samples[index];

        if !target.contains_exact(raw) {
            tracing::debug!(axis, raw, snapped, "resetting control to grid value");
            controls.set_control_value(axis, snapped);
        }

        let request = self.request.with_pin(axis, snapped);
        let (_, slice) = recompute(&self.space, &self.dependent, &request)?;
        self.request = request;
        self.draw(&slice, renderer);

        Ok(AxisValueChange {
            raw,
            snapped,
            index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Axis;
    use crate::operators::{integrate, sample};

    #[derive(Default)]
    struct Recorder {
        calls: Vec<(Vec<usize>, String, String, String, Vec<f64>)>,
    }

    impl HeatmapRenderer for Recorder {
        fn render_heatmap(
            &mut self,
            x: &NdArray<f64>,
            y: &NdArray<f64>,
            z: &NdArray<f64>,
            x_label: &str,
            y_label: &str,
            value_label: &str,
        ) {
            assert_eq!(x.shape(), y.shape());
            assert_eq!(x.shape(), z.shape());
            self.calls.push((
                z.shape().to_vec(),
                x_label.to_string(),
                y_label.to_string(),
                value_label.to_string(),
                z.data().to_vec(),
            ));
        }
    }

    #[derive(Default)]
    struct Controls {
        resets: Vec<(String, f64)>,
    }

    impl ControlSink for Controls {
        fn set_control_value(&mut self, axis: &str, value: f64) {
            self.resets.push((axis.to_string(), value));
        }
    }

    fn explorer() -> Explorer {
        let space = ParameterSpace::new(vec![
            Axis::linspace("x", 0.0, 1.0, 3).with_unit("s"),
            Axis::linspace("y", -2.0, 2.0, 41),
            Axis::linspace("z", 0.0, 3.0, 4),
        ])
        .unwrap();
        let dep = sample(&space, &["x", "y", "z"], |v| v[0] + v[1] * v[2]).unwrap();
        Explorer::new(space, dep, ProjectionRequest::new("x", "z"), "f").unwrap()
    }

    #[test]
    fn test_controls_for_pinned_axes() {
        let explorer = explorer();
        let controls = explorer.controls().unwrap();
        assert_eq!(
            controls,
            vec![ControlSpec {
                axis: "y".into(),
                min: -2.0,
                max: 2.0,
                initial: -2.0,
            }]
        );
    }

    #[test]
    fn test_render_labels() {
        let explorer = explorer();
        let mut recorder = Recorder::default();
        explorer.render(&mut recorder).unwrap();

        let (shape, x_label, y_label, value_label, _) = &recorder.calls[0];
        assert_eq!(shape, &vec![3, 4]);
        assert_eq!(x_label, "x in s");
        assert_eq!(y_label, "z");
        assert_eq!(value_label, "f");
    }

    #[test]
    fn test_off_grid_value_resets_control_and_redraws() {
        let mut explorer = explorer();
        let mut recorder = Recorder::default();
        let mut controls = Controls::default();

        let change = explorer
            .on_axis_value_changed("y", 1.97, &mut recorder, &mut controls)
            .unwrap();
        assert_eq!(change.index, 40);
        assert_eq!(change.snapped, 2.0);
        assert_eq!(controls.resets, vec![("y".to_string(), 2.0)]);
        assert_eq!(explorer.request().entries()[2], ("y".to_string(), Some(2.0)));

        // z values follow y = 2: x + 2z at (x=1, z=3)
        let (_, _, _, _, z) = &recorder.calls[0];
        assert!((z[z.len() - 1] - 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_on_grid_value_keeps_control() {
        let mut explorer = explorer();
        let mut recorder = Recorder::default();
        let mut controls = Controls::default();

        explorer
            .on_axis_value_changed("y", -2.0, &mut recorder, &mut controls)
            .unwrap();
        assert!(controls.resets.is_empty());
        assert_eq!(recorder.calls.len(), 1);
    }

    #[test]
    fn test_each_event_draws_one_frame_of_the_new_pin() {
        let mut explorer = explorer();
        let mut recorder = Recorder::default();
        let mut controls = Controls::default();

        for raw in [0.1, -1.0, 5.0] {
            explorer
                .on_axis_value_changed("y", raw, &mut recorder, &mut controls)
                .unwrap();
        }
        assert_eq!(recorder.calls.len(), 3);

        // last event clamps to y = 2; the frame matches a fresh render
        let (shape, x_label, y_label, _, z) = recorder.calls[2].clone();
        assert_eq!(shape, vec![3, 4]);
        assert_eq!(x_label, "x in s");
        assert_eq!(y_label, "z");
        let fresh = explorer.render(&mut recorder).unwrap();
        assert_eq!(z, fresh.z.data().to_vec());
    }

    #[test]
    fn test_failed_event_keeps_request() {
        let mut explorer = explorer();
        let mut recorder = Recorder::default();
        let mut controls = Controls::default();

        let before = explorer.request().clone();
        assert!(
            explorer
                .on_axis_value_changed("w", 1.0, &mut recorder, &mut controls)
                .is_err()
        );
        assert_eq!(explorer.request(), &before);
        assert!(recorder.calls.is_empty());
    }

    #[test]
    fn test_previous_pins_are_preserved() {
        let space = ParameterSpace::new(vec![
            Axis::linspace("a", 0.0, 1.0, 2),
            Axis::linspace("b", 0.0, 1.0, 2),
            Axis::linspace("c", 0.0, 1.0, 11),
            Axis::linspace("d", 0.0, 1.0, 11),
        ])
        .unwrap();
        let dep = sample(&space, &["a", "b", "c", "d"], |v| v[2] * 10.0 + v[3]).unwrap();
        let request = ProjectionRequest::new("a", "b").pin("c", Some(0.3));
        let mut explorer = Explorer::new(space, dep, request, "g").unwrap();
        let mut recorder = Recorder::default();
        let mut controls = Controls::default();

        explorer
            .on_axis_value_changed("d", 0.7, &mut recorder, &mut controls)
            .unwrap();
        let (_, _, _, _, z) = &recorder.calls[0];
        assert!(z.iter().all(|v| (v - 3.7).abs() < 1e-9));
        assert_eq!(explorer.request().len(), 4);
    }

    #[test]
    fn test_eliminated_axes_get_no_control() {
        let space = ParameterSpace::new(vec![
            Axis::linspace("x", -3.0, 3.0, 7),
            Axis::linspace("y", -2.0, 2.0, 5),
            Axis::linspace("y2", -1.0, 1.0, 3),
        ])
        .unwrap();
        let dep = sample(&space, &["x", "y", "y2"], |v| v[0] * v[0] + v[1] + v[2]).unwrap();
        let reduced = integrate(&space, &dep, "x").unwrap();
        let explorer =
            Explorer::new(space, reduced, ProjectionRequest::new("y2", "y"), "integral").unwrap();
        assert!(explorer.controls().unwrap().is_empty());
    }
}
