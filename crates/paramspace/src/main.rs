use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{WrapErr, bail};
use paramspace::demo::{default_config, load_config, peaks};
use paramspace::{LoggedControls, TextRenderer, init_logging};
use paramspace_core::explorer::Explorer;
use paramspace_core::locate::locate_min;
use paramspace_core::operators::{integrate, sample};
use paramspace_core::refine::{AxisUpdate, CenterInterval};
use paramspace_core::slicer::{LineSlice, slice_for_line};
use paramspace_core::{DependentArray, NamedValues, ParameterSpace, ProjectionRequest};

#[derive(Parser, Debug)]
#[command(name = "paramspace")]
#[command(about = "Sample a function over an N-D grid and explore 2-D cross-sections")]
struct Args {
    /// YAML axis list (default: x, y, y2 demo space)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// The two axes spanning the plot, or a single axis for a line
    #[arg(short, long, value_delimiter = ',')]
    free: Vec<String>,

    /// Pin an axis to the grid value nearest to `name=value`
    #[arg(short, long, value_parser = parse_pin)]
    pin: Vec<(String, f64)>,

    /// Integrate the sampled values along this axis before plotting
    #[arg(short, long)]
    integrate: Option<String>,

    /// Locate the minimum and print axes refined around it
    #[arg(short, long)]
    refine: bool,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn parse_pin(s: &str) -> Result<(String, f64), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{s}'"))?;
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid value for '{name}': {e}"))?;
    Ok((name.trim().to_string(), value))
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args.log_level)?;

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => default_config(),
    };
    let space = config.build().wrap_err("Invalid parameter space")?;
    tracing::info!(
        axes = ?space.axis_names(),
        points = space.total_points(),
        "built parameter space"
    );

    let names = space.axis_names();
    let mut dependent = sample(&space, &names, peaks)?;
    if let Some(axis) = &args.integrate {
        dependent = integrate(&space, &dependent, axis)?;
        tracing::info!(axis = axis.as_str(), remaining = ?dependent.remaining_axes(), "integrated");
    }

    if let Some(axis) = line_axis(&args.free, dependent.remaining_axes()) {
        let pins: NamedValues = args.pin.iter().cloned().collect::<Vec<_>>().into();
        let line = slice_for_line(&space, &dependent, &axis, &pins)?;
        print!("{}", format_line(&space.axis(line.axis).label(), &line));
        if args.refine {
            print_refined(&space, &dependent)?;
        }
        tracing::info!("done");
        return Ok(());
    }

    let (x_axis, y_axis) = match args.free.as_slice() {
        [] => match dependent.remaining_axes() {
            [x, y, ..] => (x.clone(), y.clone()),
            _ => bail!("the sampled values span no axes"),
        },
        [x, y] => (x.clone(), y.clone()),
        other => bail!("--free takes one or two axes, got {}", other.len()),
    };

    let mut request = ProjectionRequest::new(x_axis, y_axis);
    for name in dependent.remaining_axes() {
        if !request.entries().iter().any(|(n, _)| n == name) {
            request = request.pin(name.clone(), None);
        }
    }

    let mut explorer = Explorer::new(space, dependent, request, "f")?;
    let mut renderer = TextRenderer::new();
    let mut controls = LoggedControls::default();

    explorer.render(&mut renderer)?;
    for control in explorer.controls()? {
        println!(
            "control {}: [{}, {}] at {}",
            control.axis, control.min, control.max, control.initial
        );
    }
    for (axis, value) in &args.pin {
        let change = explorer.on_axis_value_changed(axis, *value, &mut renderer, &mut controls)?;
        println!(
            "pinned {axis}: {} -> {} (index {})",
            change.raw, change.snapped, change.index
        );
    }
    if let Some(frame) = renderer.take_frames().pop() {
        print!("{frame}");
    }

    if args.refine {
        print_refined(explorer.space(), explorer.dependent())?;
    }

    tracing::info!("done");
    Ok(())
}

/// The axis to draw a line along: a single `--free` axis, or the only axis
/// the sampled values still span
fn line_axis(free: &[String], remaining: &[String]) -> Option<String> {
    match (free, remaining) {
        ([axis], _) | ([], [axis]) => Some(axis.clone()),
        _ => None,
    }
}

/// One `coordinate value` pair per line under a header naming the axis
fn format_line(label: &str, line: &LineSlice) -> String {
    let mut out = format!("f along {label}\n");
    for (x, y) in line.x.iter().zip(&line.y) {
        out.push_str(&format!("{x:>12.6} {y:>14.6}\n"));
    }
    out
}

/// Locate the minimum and print every axis refined to one grid step either
/// side of it, at the same resolution.
fn print_refined(space: &ParameterSpace, dependent: &DependentArray) -> color_eyre::Result<()> {
    let minimum = locate_min(space, dependent)?;
    println!("minimum {:.6} at {:?}", minimum.value, minimum.coordinates);

    let updates: Vec<AxisUpdate> = minimum
        .coordinates
        .names()
        .filter_map(|name| {
            let axis = space.axis_by_name(name).ok()?;
            (axis.len() > 1).then(|| {
                let step = (axis.max() - axis.min()) / (axis.len() - 1) as f64;
                AxisUpdate::new(name, CenterInterval::Symmetric(step), axis.len())
            })
        })
        .collect();
    let refined = space.refined(&minimum.coordinates, &updates)?;
    for axis in refined.axes() {
        println!(
            "{}: {} samples in [{:.6}, {:.6}]",
            axis.label(),
            axis.len(),
            axis.min(),
            axis.max()
        );
    }
    Ok(())
}
