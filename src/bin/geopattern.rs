//! Command-line front end: `geopattern <INPUT> [OPTIONS]`.

use std::fs;
use std::io::{self, Write as _};
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use geopattern::{OptionOverrides, Pattern, PatternRegistry};

/// Generate a seamless SVG background pattern from a string.
#[derive(Debug, Parser)]
#[command(name = "geopattern", version, about)]
struct Cli {
    /// String the pattern is derived from.
    #[arg(required_unless_present = "list")]
    input: Option<String>,

    /// Pattern to draw instead of picking one from the input.
    #[arg(short, long)]
    pattern: Option<String>,

    /// Output representation.
    #[arg(short, long, value_enum, default_value_t = Format::Svg)]
    format: Format,

    /// Write to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the registered pattern names and exit.
    #[arg(long)]
    list: bool,

    /// Render every registered pattern into one HTML page.
    #[arg(long, conflicts_with_all = ["pattern", "format"])]
    gallery: bool,

    /// Log pattern selection to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// Log document sizes as well.
    #[arg(long)]
    debug: bool,

    #[command(flatten)]
    options: OptionOverrides,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Svg,
    Base64,
    Uri,
    DataUri,
    Html,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.debug {
        tracing::Level::TRACE
    } else if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    let registry = PatternRegistry::default();

    if cli.list {
        let mut stdout = io::stdout().lock();
        for name in registry.names() {
            writeln!(stdout, "{name}")?;
        }
        return Ok(());
    }

    let input = cli.input.as_deref().unwrap_or_default();

    let text = if cli.gallery {
        gallery(&registry, input, &cli.options)?
    } else {
        let pattern = registry
            .generate(input, cli.pattern.as_deref(), &cli.options)
            .with_context(|| format!("failed to generate pattern for {input:?}"))?;
        tracing::info!(pattern = pattern.name(), "generated");
        render(&pattern, cli.format)
    };

    match cli.output {
        Some(path) => {
            fs::write(&path, text).with_context(|| format!("failed to write {}", path.display()))?
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            if cli.format != Format::Html && !cli.gallery {
                stdout.write_all(b"\n")?;
            }
        }
    }

    Ok(())
}

fn render(pattern: &Pattern, format: Format) -> String {
    match format {
        Format::Svg => pattern.to_svg(),
        Format::Base64 => pattern.to_base64(),
        Format::Uri => pattern.to_uri_image(),
        Format::DataUri => pattern.to_data_uri(),
        Format::Html => format!(
            "<!doctype html><html><head><title>{}</title></head><body style='background: {}'></body></html>\n",
            pattern.name(),
            pattern.to_uri_image()
        ),
    }
}

fn gallery(
    registry: &PatternRegistry,
    input: &str,
    options: &OptionOverrides,
) -> anyhow::Result<String> {
    let mut html = String::from("<!doctype html>\n<html>\n<head>\n<title></title>\n</head>\n<body>");
    for name in registry.names() {
        let pattern = registry
            .generate(input, Some(name), options)
            .with_context(|| format!("failed to generate {name}"))?;
        html.push_str(&format!(
            "<h2>{name}</h2><div style='height: 200px; margin-bottom: 50px; background: {};'></div>",
            pattern.to_uri_image()
        ));
    }
    html.push_str("</body>\n</html>\n");
    Ok(html)
}
