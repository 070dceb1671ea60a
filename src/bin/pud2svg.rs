//! Convert a Warcraft II PUD map to SVG (or JSON)
//!
//! Run with: cargo run --bin pud2svg -- map.pud -o map.svg --stylesheet war2.css

use std::io::{Read, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::Level;

use pud_map::{MapParser, SvgOptions, TagProfile, render_svg};

#[derive(Parser)]
#[command(name = "pud2svg")]
#[command(about = "Render a Warcraft II PUD map as SVG")]
struct Cli {
    /// PUD file to read (stdin when omitted)
    input: Option<PathBuf>,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = TagProfile::Extended)]
    profile: TagProfile,

    #[arg(long, value_enum, default_value_t = Format::Svg)]
    format: Format,

    /// JSON file with SVG options
    #[arg(long)]
    config: Option<PathBuf>,

    /// CSS embedded in the SVG `<style>` element, overrides the config's
    #[arg(long)]
    stylesheet: Option<PathBuf>,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Svg,
    Json,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    let data = match &cli.input {
        Some(path) => std::fs::read(path)?,
        None => {
            let mut data = Vec::new();
            std::io::stdin().read_to_end(&mut data)?;
            data
        }
    };
    tracing::info!(bytes = data.len(), "read input");

    let map = MapParser::new().profile(cli.profile).parse(&data)?;
    tracing::info!(
        width = map.width(),
        height = map.height(),
        units = map.units().len(),
        "decoded map"
    );

    let rendered = match cli.format {
        Format::Json => serde_json::to_string_pretty(&map)?,
        Format::Svg => {
            let mut options: SvgOptions = match &cli.config {
                Some(path) => serde_json::from_slice(&std::fs::read(path)?)?,
                None => SvgOptions::default(),
            };
            if let Some(path) = &cli.stylesheet {
                options.stylesheet = Some(std::fs::read_to_string(path)?);
            }
            render_svg(&map, &options)
        }
    };

    match &cli.output {
        Some(path) => {
            std::fs::write(path, rendered)?;
            tracing::info!(path = %path.display(), "wrote output");
        }
        None => std::io::stdout().write_all(rendered.as_bytes())?,
    }

    Ok(())
}
