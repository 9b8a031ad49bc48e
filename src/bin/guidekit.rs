use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::Context as _;
use clap::{CommandFactory as _, Parser, ValueEnum, error::ErrorKind};
use guidekit::{CanvasSize, Color, EndpointInset, FitMode, GuideError, OverlayConfig};

/// Bad arguments, unparsable values or a missing output file.
const EXIT_USAGE: u8 = 1;
/// Rendering or writing the image failed.
const EXIT_FAILURE: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "guidekit",
    version,
    about = "guidekit -- a utility for creating overlay images",
    args_override_self = true
)]
struct Cli {
    /// Verbose status messages.
    #[arg(short = 'v')]
    verbose: bool,

    /// Debug status messages.
    #[arg(short = 'd')]
    debug: bool,

    /// Use centerpoint for overlay.
    #[arg(long)]
    centerpoint: bool,

    /// Use symmetry grid for overlay.
    #[arg(long)]
    symmetrygrid: bool,

    /// Use label for overlay.
    #[arg(long, requires = "font")]
    label: bool,

    /// Set aspect ratio.
    #[arg(long = "aspectratio", value_name = "ASPECTRATIO", default_value = "1.5", value_parser = parse_aspect_ratio)]
    aspect_ratio: f64,

    /// Set scale.
    #[arg(long, value_name = "SCALE", default_value = "0.5", value_parser = parse_scale)]
    scale: f64,

    /// Set color as R,G,B.
    #[arg(long, value_name = "COLOR", default_value = "1.0,1.0,1.0", value_parser = guidekit::parse_color)]
    color: Color,

    /// Set size as W,H.
    #[arg(long, value_name = "SIZE", default_value = "1024,1024", value_parser = guidekit::parse_size)]
    size: CanvasSize,

    /// Font file (TTF/OTF) used for labels.
    #[arg(long, value_name = "FONT")]
    font: Option<PathBuf>,

    /// How the frame reaches the aspect ratio.
    #[arg(long, value_enum, default_value_t = FitChoice::Height)]
    fit: FitChoice,

    /// Far-edge convention for symmetry grid endpoints.
    #[arg(long, value_enum, default_value_t = InsetChoice::Mixed)]
    inset: InsetChoice,

    /// Print the compiled draw instructions as JSON on stdout.
    #[arg(long)]
    dump_plan: bool,

    /// Set output file; the image format follows the extension.
    #[arg(long = "outputfile", value_name = "OUTPUTFILE")]
    output_file: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FitChoice {
    /// Keep the frame width and derive its height.
    Height,
    /// Inscribe the frame in the canvas.
    Contain,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum InsetChoice {
    Mixed,
    Uniform,
}

impl Cli {
    fn overlay_config(&self) -> OverlayConfig {
        OverlayConfig {
            size: self.size,
            aspect_ratio: self.aspect_ratio,
            scale: self.scale,
            color: self.color,
            centerpoint: self.centerpoint,
            symmetrygrid: self.symmetrygrid,
            label: self.label,
            fit_mode: match self.fit {
                FitChoice::Height => FitMode::Height,
                FitChoice::Contain => FitMode::Contain,
            },
            inset: match self.inset {
                InsetChoice::Mixed => EndpointInset::Mixed,
                InsetChoice::Uniform => EndpointInset::Uniform,
            },
            ..OverlayConfig::default()
        }
    }
}

fn parse_aspect_ratio(raw: &str) -> Result<f64, GuideError> {
    guidekit::parse_f64("aspect ratio", raw)
}

fn parse_scale(raw: &str) -> Result<f64, GuideError> {
    guidekit::parse_f64("scale", raw)
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            if matches!(
                err.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            ) {
                err.exit();
            }
            let _ = err.print();
            return ExitCode::from(EXIT_USAGE);
        }
    };

    init_tracing(cli.verbose, cli.debug);

    let Some(out) = cli.output_file.clone() else {
        eprintln!("error: must have output file parameter");
        eprintln!("{}", Cli::command().render_usage());
        return ExitCode::from(EXIT_USAGE);
    };

    match run(&cli, &out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            let usage = err
                .downcast_ref::<GuideError>()
                .is_some_and(GuideError::is_usage);
            ExitCode::from(if usage { EXIT_USAGE } else { EXIT_FAILURE })
        }
    }
}

fn run(cli: &Cli, out: &Path) -> anyhow::Result<()> {
    let cfg = cli.overlay_config();
    cfg.validate()?;

    let font = match &cli.font {
        Some(path) => Some(std::fs::read(path).map_err(|e| {
            GuideError::validation(format!("cannot read font '{}': {e}", path.display()))
        })?),
        None => None,
    };

    tracing::info!(path = %out.display(), "writing overlay file");
    let (plan, frame) = guidekit::render_overlay(&cfg, font)?;

    if cli.dump_plan {
        let json = plan.to_json_pretty().context("serialize overlay plan")?;
        println!("{json}");
    }

    guidekit::write_frame(&frame, out)?;
    eprintln!("wrote {}", out.display());
    Ok(())
}

fn init_tracing(verbose: bool, debug: bool) {
    let level = if debug {
        tracing::Level::DEBUG
    } else if verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
