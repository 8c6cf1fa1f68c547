//! xG command line
//!
//! - `xg`          score one shot against a logistic model file
//! - `play-types`  label set-piece shots in a CSV event log
//! - `pitch`       write a pitch diagram (optionally with shots) as SVG

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};
use xg_core::{
    BodyPart, CoordinateConvention, EventLog, LogisticModel, PitchRenderer, PitchView, PlayType,
    PlayTypeExtractor, ShotContext, ShotGeometry, SubtypeMatching, XgConfig, XgError, XgEstimator,
};

/// Exit status when the inputs of the call were rejected.
const EXIT_BAD_INPUT: u8 = 2;

#[derive(Parser)]
#[command(name = "xg")]
#[command(about = "Expected goals for football shots", long_about = None)]
struct Cli {
    /// JSON or YAML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Probability that a shot is scored
    Xg {
        /// Logistic model JSON file
        #[arg(long)]
        model: PathBuf,

        #[arg(long, allow_hyphen_values = true)]
        x: f64,

        #[arg(long, allow_hyphen_values = true)]
        y: f64,

        /// Overrides the configured coordinate convention
        #[arg(long, value_enum)]
        convention: Option<ConventionArg>,

        /// Opponents between the shooter and the goal
        #[arg(long, default_value_t = 0)]
        opponents: u32,

        /// Shot taken without pressure
        #[arg(long)]
        no_pressure: bool,

        #[arg(long, value_enum, default_value_t = BodyPartArg::Foot)]
        body_part: BodyPartArg,

        #[arg(long, value_enum, default_value_t = PlayTypeArg::OpenPlay)]
        play_type: PlayTypeArg,
    },

    /// Set-piece labels for the shots of an event log
    PlayTypes {
        /// Event CSV (Metrica layout)
        #[arg(long)]
        events: PathBuf,

        /// Compare subtypes ignoring case and surrounding spaces
        #[arg(long)]
        case_insensitive: bool,
    },

    /// Render the pitch as SVG
    Pitch {
        /// Output SVG path
        #[arg(long)]
        out: PathBuf,

        /// Only the attacking half
        #[arg(long)]
        half: bool,

        #[arg(long)]
        length: Option<f64>,

        #[arg(long)]
        width: Option<f64>,

        /// Shot to overlay in pitch coordinates, "x,y" or "x,y,xg" (repeatable)
        #[arg(long = "shot", allow_hyphen_values = true)]
        shots: Vec<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ConventionArg {
    Goal,
    Midfield,
}

impl From<ConventionArg> for CoordinateConvention {
    fn from(arg: ConventionArg) -> Self {
        match arg {
            ConventionArg::Goal => CoordinateConvention::GoalCentered,
            ConventionArg::Midfield => CoordinateConvention::MidfieldCentered,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum BodyPartArg {
    Foot,
    Head,
    Other,
}

impl From<BodyPartArg> for BodyPart {
    fn from(arg: BodyPartArg) -> Self {
        match arg {
            BodyPartArg::Foot => BodyPart::Foot,
            BodyPartArg::Head => BodyPart::Head,
            BodyPartArg::Other => BodyPart::Other,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum PlayTypeArg {
    OpenPlay,
    FreeKick,
    Penalty,
}

impl From<PlayTypeArg> for PlayType {
    fn from(arg: PlayTypeArg) -> Self {
        match arg {
            PlayTypeArg::OpenPlay => PlayType::OpenPlay,
            PlayTypeArg::FreeKick => PlayType::DirectFreeKick,
            PlayTypeArg::Penalty => PlayType::Penalty,
        }
    }
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .try_init()
        .ok();
}

fn load_config(path: Option<&PathBuf>) -> Result<XgConfig> {
    match path {
        Some(path) => XgConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display())),
        None => Ok(XgConfig::default()),
    }
}

fn main() -> ExitCode {
    init_logging();
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(exit_code(&err))
        }
    }
}

fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<XgError>() {
        Some(xg_err) if xg_err.is_input_error() => EXIT_BAD_INPUT,
        _ => 1,
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = load_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Xg {
            model,
            x,
            y,
            convention,
            opponents,
            no_pressure,
            body_part,
            play_type,
        } => {
            if let Some(convention) = convention {
                config.geometry.convention = convention.into();
            }
            let model = LogisticModel::load(&model)
                .with_context(|| format!("Failed to load model: {}", model.display()))?;
            let estimator = XgEstimator::new(ShotGeometry::new(config.geometry));
            let context = ShotContext::default()
                .with_opponents(opponents)
                .with_pressure(!no_pressure)
                .with_body_part(body_part.into())
                .with_play_type(play_type.into());

            let features = estimator.features(x, y, &context)?;
            let xg = estimator.estimate(x, y, &model, &context)?;
            let output = json!({
                "x": x,
                "y": y,
                "convention": config.geometry.convention.as_str(),
                "distance_to_goal": features.distance_to_goal,
                "shot_angle": features.shot_angle,
                "xg": xg,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }

        Commands::PlayTypes { events, case_insensitive } => {
            if case_insensitive {
                config.extraction.matching = SubtypeMatching::CaseInsensitive;
            }
            let log = EventLog::from_path(&events)
                .with_context(|| format!("Failed to read events: {}", events.display()))?;
            let labels = PlayTypeExtractor::new(config.extraction).extract(log.records())?;
            let output: Vec<_> = labels
                .iter()
                .map(|(index, set_piece)| json!({ "index": index, "label": set_piece.label() }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }

        Commands::Pitch { out, half, length, width, shots } => {
            if half {
                config.pitch.view = PitchView::AttackingHalf;
            }
            if let Some(length) = length {
                config.pitch.length_m = length;
            }
            if let Some(width) = width {
                config.pitch.width_m = width;
            }
            let mut figure = PitchRenderer::new(config.pitch)?.render();
            for shot in &shots {
                let (x, y, xg) = parse_shot(shot)?;
                figure.add_shot(x, y, xg);
            }
            fs::write(&out, figure.to_svg())
                .with_context(|| format!("Failed to write SVG: {}", out.display()))?;
            println!("Wrote {} ({} shots)", out.display(), shots.len());
        }
    }

    Ok(())
}

fn parse_shot(raw: &str) -> Result<(f64, f64, Option<f64>)> {
    let parts: Vec<f64> = raw
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<std::result::Result<_, _>>()
        .with_context(|| format!("Invalid shot '{}'", raw))?;
    match parts.as_slice() {
        [x, y] => Ok((*x, *y, None)),
        [x, y, xg] => Ok((*x, *y, Some(*xg))),
        _ => bail!("Invalid shot '{}': expected x,y or x,y,xg", raw),
    }
}
