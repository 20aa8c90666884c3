//! Text heat maps for the terminal

use paramspace_core::NdArray;
use paramspace_core::explorer::{ControlSink, HeatmapRenderer};

/// Shades from lowest to highest value
const RAMP: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Renders each heat map into a text frame. Frames are kept until taken.
#[derive(Debug, Default)]
pub struct TextRenderer {
    frames: Vec<String>,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain the frames rendered so far
    pub fn take_frames(&mut self) -> Vec<String> {
        std::mem::take(&mut self.frames)
    }
}

impl HeatmapRenderer for TextRenderer {
    fn render_heatmap(
        &mut self,
        x: &NdArray<f64>,
        y: &NdArray<f64>,
        z: &NdArray<f64>,
        x_label: &str,
        y_label: &str,
        value_label: &str,
    ) {
        let (rows, cols) = (z.shape()[0], z.shape()[1]);

        // Which free axis runs down the rows depends on declaration order.
        // Each coordinate array varies along exactly one dimension, so x runs
        // down the rows unless it changes across the first row.
        let x_along_rows = if cols > 1 {
            x.get(&[0, 1]) == x.get(&[0, 0])
        } else {
            rows == 1 || x.get(&[1, 0]) != x.get(&[0, 0])
        };
        let (row_label, row_coords, col_label, col_coords) = if x_along_rows {
            (x_label, x, y_label, y)
        } else {
            (y_label, y, x_label, x)
        };

        let (lo, hi) = z
            .data()
            .iter()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        let span = if hi > lo { hi - lo } else { 1.0 };

        let mut frame = format!(
            "{value_label} [{lo:.4}, {hi:.4}]  rows: {row_label} ({:.3}..{:.3})  cols: {col_label} ({:.3}..{:.3})\n",
            first(row_coords, [0, 0]),
            first(row_coords, [rows - 1, 0]),
            first(col_coords, [0, 0]),
            first(col_coords, [0, cols - 1]),
        );
        for r in 0..rows {
            for c in 0..cols {
                let shade = match z.get(&[r, c]) {
                    Some(v) if v.is_finite() => {
                        let level = ((v - lo) / span * (RAMP.len() - 1) as f64).round() as usize;
                        RAMP[level.min(RAMP.len() - 1)]
                    }
                    _ => '?',
                };
                frame.push(shade);
            }
            frame.push('\n');
        }
        self.frames.push(frame);
    }
}

fn first(arr: &NdArray<f64>, idx: [usize; 2]) -> f64 {
    arr.get(&idx).copied().unwrap_or(f64::NAN)
}

/// Logs control resets; the terminal has no live controls to move.
#[derive(Debug, Default)]
pub struct LoggedControls {
    pub resets: Vec<(String, f64)>,
}

impl ControlSink for LoggedControls {
    fn set_control_value(&mut self, axis: &str, value: f64) {
        tracing::info!(axis, value, "control snapped to grid value");
        self.resets.push((axis.to_string(), value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_has_one_line_per_row() {
        let x = NdArray::from_fn(vec![3, 4], |idx| idx[0] as f64);
        let y = NdArray::from_fn(vec![3, 4], |idx| idx[1] as f64 * 10.0);
        let z = NdArray::from_fn(vec![3, 4], |idx| (idx[0] * 4 + idx[1]) as f64);

        let mut renderer = TextRenderer::new();
        renderer.render_heatmap(&x, &y, &z, "a", "b", "f");
        let frames = renderer.take_frames();
        assert_eq!(frames.len(), 1);

        let lines: Vec<&str> = frames[0].lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("rows: a"));
        assert!(lines[0].contains("cols: b"));
        assert_eq!(lines[1].chars().next(), Some(' '));
        assert_eq!(lines[3].chars().last(), Some('@'));
        assert!(renderer.take_frames().is_empty());
    }

    #[test]
    fn test_rows_follow_varying_axis() {
        // x varies along columns here
        let x = NdArray::from_fn(vec![2, 3], |idx| idx[1] as f64);
        let y = NdArray::from_fn(vec![2, 3], |idx| idx[0] as f64);
        let z = NdArray::new(vec![2, 3], 1.0);

        let mut renderer = TextRenderer::new();
        renderer.render_heatmap(&x, &y, &z, "a", "b", "f");
        let frame = &renderer.take_frames()[0];
        assert!(frame.contains("rows: b"));
        assert!(frame.contains("cols: a"));
    }

    #[test]
    fn test_single_row_keeps_labels() {
        // x has one sample and runs down the single row
        let x = NdArray::new(vec![1, 3], 5.0);
        let y = NdArray::from_fn(vec![1, 3], |idx| idx[1] as f64);
        let z = NdArray::from_fn(vec![1, 3], |idx| idx[1] as f64);

        let mut renderer = TextRenderer::new();
        renderer.render_heatmap(&x, &y, &z, "xa", "ya", "f");
        let frame = &renderer.take_frames()[0];
        assert!(frame.contains("rows: xa (5.000..5.000)"));
        assert!(frame.contains("cols: ya (0.000..2.000)"));
    }

    #[test]
    fn test_single_column_keeps_labels() {
        // y has one sample and runs across the single column
        let x = NdArray::from_fn(vec![3, 1], |idx| idx[0] as f64);
        let y = NdArray::new(vec![3, 1], -1.0);
        let z = NdArray::from_fn(vec![3, 1], |idx| idx[0] as f64);

        let mut renderer = TextRenderer::new();
        renderer.render_heatmap(&x, &y, &z, "xa", "ya", "f");
        let frame = &renderer.take_frames()[0];
        assert!(frame.contains("rows: xa (0.000..2.000)"));
        assert!(frame.contains("cols: ya (-1.000..-1.000)"));
    }
}
