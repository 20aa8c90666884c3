use serde::{Deserialize, Serialize};

/// A named, ordered sequence of sample points defining one dimension of a
/// parameter space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub name: String,
    pub samples: Vec<f64>,
    /// Display-only unit string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl Axis {
    pub fn new(name: impl Into<String>, samples: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            samples,
            unit: None,
        }
    }

    /// Uniformly spaced samples over `[start, stop]`, endpoints included.
    pub fn linspace(name: impl Into<String>, start: f64, stop: f64, count: usize) -> Self {
        Self::new(name, linspace(start, stop, count))
    }

    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Unit string, empty when no unit is set
    pub fn unit_str(&self) -> &str {
        self.unit.as_deref().unwrap_or("")
    }

    /// Axis label for plots, e.g. `"lT in K"`
    pub fn label(&self) -> String {
        match &self.unit {
            Some(unit) => format!("{} in {unit}", self.name),
            None => self.name.clone(),
        }
    }

    /// Index of the sample closest to `value`. The first occurrence wins on ties.
    pub fn nearest_index(&self, value: f64) -> usize {
        let mut best = 0;
        let mut best_dist = f64::INFINITY;
        for (i, &s) in self.samples.iter().enumerate() {
            let dist = (s - value).abs();
            if dist < best_dist {
                best = i;
                best_dist = dist;
            }
        }
        best
    }

    /// Sample closest to `value`
    pub fn nearest_value(&self, value: f64) -> f64 {
        self.samples[self.nearest_index(value)]
    }

    /// Whether `value` is exactly one of the samples
    pub fn contains_exact(&self, value: f64) -> bool {
        self.samples.contains(&value)
    }

    pub fn min(&self) -> f64 {
        self.samples.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.samples.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}

/// `count` uniformly spaced values over `[start, stop]`. A single value
/// yields `[start]`.
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (count - 1) as f64;
            (0..count)
                .map(|i| {
                    if i == count - 1 {
                        stop
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}
