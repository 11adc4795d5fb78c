use radar_chart_rs::api::RadarRequest;
use radar_chart_rs::core::Rect;
use radar_chart_rs::render::{Color, SvgSurface};
use std::fs;
use std::path::PathBuf;

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    output: PathBuf,
    background: Option<Color>,
}

fn main() {
    let _ = radar_chart_rs::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let raw = fs::read_to_string(&args.input)
        .map_err(|err| format!("failed to read `{}`: {err}", args.input.display()))?;
    let request = RadarRequest::from_json_compat_str(&raw).map_err(|err| err.to_string())?;
    let chart = request.chart().map_err(|err| err.to_string())?;

    let region = chart.region();
    let (width, height) = document_size(region);
    let mut surface = SvgSurface::new(width, height).map_err(|err| err.to_string())?;
    if let Some(background) = args.background {
        surface = surface.with_background(background);
    }

    let frame = request
        .render(&mut surface)
        .map_err(|err| err.to_string())?;
    for clamped in frame.clamped_values() {
        eprintln!(
            "note: `{}` {} = {} exceeds axis range 0..={}",
            clamped.dataset_id, clamped.axis, clamped.value, clamped.max
        );
    }

    fs::write(&args.output, surface.finish())
        .map_err(|err| format!("failed to write `{}`: {err}", args.output.display()))
}

fn document_size(region: Rect) -> (f64, f64) {
    (
        (region.x + region.width).max(1.0),
        (region.y + region.height).max(1.0),
    )
}

fn parse_args() -> Result<CliArgs, String> {
    const USAGE: &str = "usage: radar_svg --input <request.json> --output <chart.svg> [--background <#rrggbb>]";

    let mut args = std::env::args().skip(1);
    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;
    let mut background = None::<Color>;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--background" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --background".to_owned())?;
                background = Some(value.parse::<Color>().map_err(|err| err.to_string())?);
            }
            other => return Err(format!("unknown flag `{other}`\n{USAGE}")),
        }
    }

    Ok(CliArgs {
        input: input.ok_or_else(|| USAGE.to_owned())?,
        output: output.ok_or_else(|| USAGE.to_owned())?,
        background,
    })
}
