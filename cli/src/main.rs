use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use shape::config::{
    DEFAULT_CORNER_ROUNDNESS, DEFAULT_CORNER_SIZE_PCT, DEFAULT_INNER_ARCH_RATIO,
    DEFAULT_INNER_ARCH_WIDTH_PCT, DEFAULT_MARGIN_PCT, DEFAULT_OUTER_ARCH_RATIO,
    DEFAULT_OUTER_ARCH_WIDTH_PCT, DEFAULT_SIZE, DEFAULT_THICKNESS, GradientColors,
};
use shape::{CommandStyle, HexColor, IconConfig, IconError, PathResult};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Icon(#[from] IconError),
    #[error(transparent)]
    Document(#[from] svgdoc::DocumentError),
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// What to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Emit {
    /// Complete SVG document.
    Svg,
    /// Path commands and node types, one per line.
    Path,
    /// Outline as JSON.
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "vaulticon", about = "Generates the vault icon as SVG")]
struct Cli {
    /// Output filename, or - for stdout.
    #[arg(short, long, env = "VAULTICON_OUTPUT", default_value = "vault_icon.svg")]
    output: String,

    #[arg(long, value_enum, default_value_t = Emit::Svg)]
    emit: Emit,

    /// Write every path command letter instead of collapsing repeats.
    #[arg(long, default_value_t = false)]
    no_compress: bool,

    /// Log derived geometry.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    /// "Native" size of the icon.
    #[arg(
        short,
        long,
        env = "VAULTICON_SIZE",
        default_value_t = DEFAULT_SIZE,
        value_parser = clap::value_parser!(u32).range(1..),
    )]
    size: u32,

    /// Stroke thickness.
    #[arg(
        short,
        long,
        env = "VAULTICON_THICKNESS",
        default_value_t = DEFAULT_THICKNESS,
        value_parser = parse_positive,
    )]
    thickness: f64,

    /// Stroke color, as a hex value.
    #[arg(short, long, env = "VAULTICON_COLOR", default_value = "ff4f4f")]
    color: HexColor,

    /// Fraction of the canvas left as margin on each side (0 <= x < 0.5).
    /// Stroke thickness is not taken into account.
    #[arg(
        short,
        long,
        env = "VAULTICON_MARGIN_PCT",
        default_value_t = DEFAULT_MARGIN_PCT,
        value_parser = parse_half_open,
    )]
    margin_pct: f64,

    /// Fraction of the inner width curved at each corner (0 <= x < 0.5).
    #[arg(
        long,
        env = "VAULTICON_CORNER_SIZE_PCT",
        default_value_t = DEFAULT_CORNER_SIZE_PCT,
        value_parser = parse_half_open,
    )]
    corner_size_pct: f64,

    /// How round the corners are; 0 is a sharp diagonal (0 <= x <= 1).
    #[arg(
        long,
        env = "VAULTICON_CORNER_ROUNDNESS",
        default_value_t = DEFAULT_CORNER_ROUNDNESS,
        value_parser = parse_unit_interval,
    )]
    corner_roundness: f64,

    /// Width-to-height ratio of the outer arch.
    #[arg(
        long,
        env = "VAULTICON_OUTER_ARCH_SIZE_RATIO",
        default_value_t = DEFAULT_OUTER_ARCH_RATIO,
        value_parser = parse_positive,
    )]
    outer_arch_size_ratio: f64,

    /// Fraction of the bottom straight edge taken by the arch (0 < x <= 1).
    #[arg(
        long,
        env = "VAULTICON_OUTER_ARCH_WIDTH_PCT",
        default_value_t = DEFAULT_OUTER_ARCH_WIDTH_PCT,
        value_parser = parse_unit_fraction,
    )]
    outer_arch_width_pct: f64,

    /// Width-to-height ratio of the inner arch.
    #[arg(
        long,
        env = "VAULTICON_INNER_ARCH_SIZE_RATIO",
        default_value_t = DEFAULT_INNER_ARCH_RATIO,
        value_parser = parse_positive,
    )]
    inner_arch_size_ratio: f64,

    /// Inner arch width as a fraction of the outer arch width (0 < x <= 1).
    #[arg(
        long,
        env = "VAULTICON_INNER_ARCH_WIDTH_PCT",
        default_value_t = DEFAULT_INNER_ARCH_WIDTH_PCT,
        value_parser = parse_unit_fraction,
    )]
    inner_arch_width_pct: f64,

    /// Bottom gradient color, as a hex value.
    #[arg(long, env = "VAULTICON_GRADIENT_BOTTOM", default_value = "1b1b1b")]
    gradient_bottom: HexColor,

    /// Middle gradient color, as a hex value.
    #[arg(long, env = "VAULTICON_GRADIENT_MIDDLE", default_value = "585858")]
    gradient_middle: HexColor,

    /// Top gradient color, as a hex value.
    #[arg(long, env = "VAULTICON_GRADIENT_TOP", default_value = "7c7c7c")]
    gradient_top: HexColor,
}

impl Cli {
    fn icon_config(&self) -> IconConfig {
        IconConfig {
            size: self.size,
            thickness: self.thickness,
            stroke_color: self.color.clone(),
            margin_pct: self.margin_pct,
            corner_size_pct: self.corner_size_pct,
            corner_roundness: self.corner_roundness,
            outer_arch_ratio: self.outer_arch_size_ratio,
            outer_arch_width_pct: self.outer_arch_width_pct,
            inner_arch_ratio: self.inner_arch_size_ratio,
            inner_arch_width_pct: self.inner_arch_width_pct,
            gradient: GradientColors {
                bottom: self.gradient_bottom.clone(),
                middle: self.gradient_middle.clone(),
                top: self.gradient_top.clone(),
            },
        }
    }

    fn command_style(&self) -> CommandStyle {
        if self.no_compress { CommandStyle::Explicit } else { CommandStyle::Compressed }
    }
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let level = if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    tracing_subscriber::fmt().with_writer(io::stderr).with_max_level(level).init();

    let config = cli.icon_config();
    config.validate()?;
    let rendered = render(&cli, &config)?;
    write_output(&cli.output, &rendered)
}

/// Produce the requested output for `config`.
fn render(cli: &Cli, config: &IconConfig) -> Result<String, CliError> {
    let style = cli.command_style();
    match cli.emit {
        Emit::Svg => Ok(svgdoc::generate_document(config, &docname(&cli.output), style)?),
        Emit::Path => {
            let outline = shape::assemble(config, style)?;
            Ok(format!("{}\n{}\n", outline.commands, outline.node_types))
        }
        Emit::Json => {
            let outline: PathResult = shape::assemble(config, style)?;
            let mut json = serde_json::to_string_pretty(&outline)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// File name recorded in the document; stdout output gets the default name.
fn docname(output: &str) -> String {
    if output == "-" {
        return "vault_icon.svg".to_owned();
    }
    PathBuf::from(output)
        .file_name()
        .map_or_else(|| output.to_owned(), |name| name.to_string_lossy().into_owned())
}

fn write_output(output: &str, contents: &str) -> Result<(), CliError> {
    let io_err = |source: io::Error| CliError::Io { path: output.to_owned(), source };
    if output == "-" {
        let mut stdout = io::stdout().lock();
        stdout.write_all(contents.as_bytes()).map_err(io_err)?;
        return stdout.flush().map_err(io_err);
    }
    std::fs::write(output, contents).map_err(io_err)?;
    tracing::info!(path = %output, bytes = contents.len(), "wrote icon");
    Ok(())
}

fn parse_f64(raw: &str) -> Result<f64, String> {
    let value = raw.trim().parse::<f64>().map_err(|e| format!("`{raw}` is not a number: {e}"))?;
    if value.is_finite() { Ok(value) } else { Err(format!("`{raw}` is not finite")) }
}

fn parse_positive(raw: &str) -> Result<f64, String> {
    let value = parse_f64(raw)?;
    if value > 0.0 { Ok(value) } else { Err("must be > 0".to_owned()) }
}

fn parse_half_open(raw: &str) -> Result<f64, String> {
    let value = parse_f64(raw)?;
    if (0.0..0.5).contains(&value) {
        Ok(value)
    } else {
        Err("must be in the range 0 <= x < 0.5".to_owned())
    }
}

fn parse_unit_interval(raw: &str) -> Result<f64, String> {
    let value = parse_f64(raw)?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err("must be in the range 0 <= x <= 1".to_owned())
    }
}

fn parse_unit_fraction(raw: &str) -> Result<f64, String> {
    let value = parse_f64(raw)?;
    if value > 0.0 && value <= 1.0 {
        Ok(value)
    } else {
        Err("must be in the range 0 < x <= 1".to_owned())
    }
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
