use clap::Parser;
use pixfind::io::load_rgba_image;
use pixfind::{AxisOrder, LocateConfig, Locator, Match, ResumePolicy};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "Locate an image fragment inside a larger image")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
enum AxisOrderConfig {
    #[default]
    RowColumn,
    ColumnRow,
}

impl From<AxisOrderConfig> for AxisOrder {
    fn from(value: AxisOrderConfig) -> Self {
        match value {
            AxisOrderConfig::RowColumn => AxisOrder::RowColumn,
            AxisOrderConfig::ColumnRow => AxisOrder::ColumnRow,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ResumeConfig {
    #[default]
    NextPixel,
    PastAnchor,
}

impl From<ResumeConfig> for ResumePolicy {
    fn from(value: ResumeConfig) -> Self {
        match value {
            ResumeConfig::NextPixel => ResumePolicy::NextPixel,
            ResumeConfig::PastAnchor => ResumePolicy::PastAnchor,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct LocateConfigJson {
    axis_order: AxisOrderConfig,
    resume: ResumeConfig,
    start_pixel: usize,
    parallel: bool,
}

impl Default for LocateConfigJson {
    fn default() -> Self {
        let cfg = LocateConfig::default();
        Self {
            axis_order: AxisOrderConfig::default(),
            resume: ResumeConfig::default(),
            start_pixel: cfg.start_pixel,
            parallel: cfg.parallel,
        }
    }
}

impl From<LocateConfigJson> for LocateConfig {
    fn from(value: LocateConfigJson) -> Self {
        Self {
            axis_order: value.axis_order.into(),
            resume: value.resume.into(),
            start_pixel: value.start_pixel,
            parallel: value.parallel,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Config {
    origin_path: String,
    target_path: String,
    output_path: Option<String>,
    locate: LocateConfigJson,
}

#[derive(Debug, Serialize)]
struct MatchRecord {
    x: usize,
    y: usize,
    width: usize,
    height: usize,
    pixel_index: usize,
}

impl From<Match> for MatchRecord {
    fn from(value: Match) -> Self {
        Self {
            x: value.x,
            y: value.y,
            width: value.width,
            height: value.height,
            pixel_index: value.pixel_index,
        }
    }
}

#[derive(Debug, Serialize)]
struct Output {
    found: bool,
    #[serde(rename = "match")]
    found_match: Option<MatchRecord>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("pixfind=info".parse()?))
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.origin_path.is_empty() || config.target_path.is_empty() {
        return Err("origin_path and target_path must be set in the config".into());
    }

    let origin = load_rgba_image(&config.origin_path)?;
    let target = load_rgba_image(&config.target_path)?;
    tracing::info!(
        origin_width = origin.width(),
        origin_height = origin.height(),
        target_width = target.width(),
        target_height = target.height(),
        "images loaded"
    );

    let locator = Locator::new(target).with_config(config.locate.into());
    let found = locator.locate(origin.view());
    let output = Output {
        found: found.is_some(),
        found_match: found.map(MatchRecord::from),
    };
    let json = serde_json::to_string_pretty(&output)?;

    match config.output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
