//! Default space and sample function used when no config is given

use std::path::Path;

use color_eyre::eyre::WrapErr;
use paramspace_core::SpaceConfig;
use paramspace_core::config::{AxisConfig, SampleSpec};

/// Three axes: x in [-3, 3], y in [-2, 2] and y2 in [-1, 1]
pub fn default_config() -> SpaceConfig {
    let axis = |name: &str, start: f64, stop: f64, count: usize| AxisConfig {
        name: name.to_string(),
        unit: None,
        samples: SampleSpec::Linspace { start, stop, count },
    };
    SpaceConfig {
        axes: vec![
            axis("x", -3.0, 3.0, 51),
            axis("y", -2.0, 2.0, 41),
            axis("y2", -1.0, 1.0, 31),
        ],
    }
}

/// `(1 - a/2 + a^5 + s^3) * exp(-a^2 - s^2)` with `a` the first coordinate
/// and `s` the sum of the rest
pub fn peaks(v: &[f64]) -> f64 {
    let a = v.first().copied().unwrap_or(0.0);
    let s: f64 = v.iter().skip(1).sum();
    (1.0 - a / 2.0 + a.powi(5) + s.powi(3)) * (-a.powi(2) - s.powi(2)).exp()
}

/// Read a space description from a YAML file
pub fn load_config(path: &Path) -> color_eyre::Result<SpaceConfig> {
    let content = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
    let config = serde_saphyr::from_str(&content)
        .wrap_err_with(|| format!("Failed to parse {}", path.display()))?;
    Ok(config)
}
