#![allow(clippy::float_cmp)]

use super::*;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(std::iter::once("vaulticon").chain(args.iter().copied()))
}

// =============================================================
// Argument parsing
// =============================================================

#[test]
fn defaults_build_stock_config() {
    let cli = parse(&[]).unwrap();
    assert_eq!(cli.icon_config(), IconConfig::default());
    assert_eq!(cli.emit, Emit::Svg);
    assert_eq!(cli.command_style(), CommandStyle::Compressed);
}

#[test]
fn short_flags_map_to_config() {
    let args = ["-s", "100", "-t", "4", "-c", "00AAff", "-m", "0.02", "-o", "out.svg"];
    let cli = parse(&args).unwrap();
    let cfg = cli.icon_config();
    assert_eq!(cfg.size, 100);
    assert_eq!(cfg.thickness, 4.0);
    assert_eq!(cfg.stroke_color.as_str(), "00AAff");
    assert_eq!(cfg.margin_pct, 0.02);
    assert_eq!(cli.output, "out.svg");
}

#[test]
fn arch_flags_map_to_config() {
    let cli = parse(&[
        "--outer-arch-size-ratio",
        "0.9",
        "--outer-arch-width-pct",
        "0.5",
        "--inner-arch-size-ratio",
        "0.7",
        "--inner-arch-width-pct",
        "1",
    ])
    .unwrap();
    let cfg = cli.icon_config();
    assert_eq!(cfg.outer_arch_ratio, 0.9);
    assert_eq!(cfg.outer_arch_width_pct, 0.5);
    assert_eq!(cfg.inner_arch_ratio, 0.7);
    assert_eq!(cfg.inner_arch_width_pct, 1.0);
}

#[test]
fn gradient_flags_map_to_config() {
    let cli = parse(&[
        "--gradient-bottom",
        "000000",
        "--gradient-middle",
        "111111",
        "--gradient-top",
        "222222",
    ])
    .unwrap();
    let cfg = cli.icon_config();
    assert_eq!(cfg.gradient.bottom.as_str(), "000000");
    assert_eq!(cfg.gradient.middle.as_str(), "111111");
    assert_eq!(cfg.gradient.top.as_str(), "222222");
}

#[test]
fn no_compress_selects_explicit_style() {
    let cli = parse(&["--no-compress"]).unwrap();
    assert_eq!(cli.command_style(), CommandStyle::Explicit);
}

#[test]
fn bad_color_is_rejected() {
    assert!(parse(&["-c", "#ff4f4f"]).is_err());
    assert!(parse(&["--gradient-top", "12345"]).is_err());
}

#[test]
fn out_of_range_values_are_rejected() {
    assert!(parse(&["-m", "0.5"]).is_err());
    assert!(parse(&["--corner-size-pct", "-0.1"]).is_err());
    assert!(parse(&["--corner-roundness", "1.01"]).is_err());
    assert!(parse(&["--outer-arch-width-pct", "0"]).is_err());
    assert!(parse(&["--inner-arch-size-ratio", "0"]).is_err());
    assert!(parse(&["-s", "0"]).is_err());
    assert!(parse(&["-t", "nan"]).is_err());
}

#[test]
fn boundary_values_are_accepted() {
    assert!(parse(&["-m", "0", "--corner-roundness", "0"]).is_ok());
    assert!(parse(&["--corner-roundness", "1", "--outer-arch-width-pct", "1"]).is_ok());
}

// =============================================================
// Range parsers
// =============================================================

#[test]
fn range_parsers() {
    assert_eq!(parse_positive("2.5"), Ok(2.5));
    assert!(parse_positive("-1").is_err());
    assert_eq!(parse_half_open("0"), Ok(0.0));
    assert!(parse_half_open("0.5").is_err());
    assert_eq!(parse_unit_interval("1"), Ok(1.0));
    assert!(parse_unit_interval("abc").is_err());
    assert_eq!(parse_unit_fraction("1"), Ok(1.0));
    assert!(parse_unit_fraction("0").is_err());
    assert!(parse_f64("inf").is_err());
}

// =============================================================
// Rendering
// =============================================================

#[test]
fn path_emit_has_commands_then_node_types() {
    let cli = parse(&["-s", "100", "-m", "0.02", "--emit", "path"]).unwrap();
    let out = render(&cli, &cli.icon_config()).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("M 13.52,2 L 86.48,2 C"));
    assert_eq!(lines[1], "c".repeat(21));
}

#[test]
fn json_emit_is_valid_json() {
    let cli = parse(&["--emit", "json"]).unwrap();
    let out = render(&cli, &cli.icon_config()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["size"], 1512);
    assert_eq!(value["node_count"], 21);
}

#[test]
fn svg_emit_records_file_name() {
    let cli = parse(&["-o", "some/dir/icon.svg"]).unwrap();
    let out = render(&cli, &cli.icon_config()).unwrap();
    assert!(out.contains("sodipodi:docname=\"icon.svg\""));
}

#[test]
fn docname_for_stdout_uses_default() {
    assert_eq!(docname("-"), "vault_icon.svg");
    assert_eq!(docname("a/b/c.svg"), "c.svg");
}

#[test]
fn write_output_writes_file() {
    let path = std::env::temp_dir().join(format!("vaulticon-test-{}.svg", std::process::id()));
    let path_str = path.to_string_lossy().into_owned();
    write_output(&path_str, "<svg/>").unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "<svg/>");
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn write_output_reports_path_on_failure() {
    let err = write_output("/nonexistent-dir/vaulticon/icon.svg", "<svg/>").unwrap_err();
    assert!(err.to_string().contains("/nonexistent-dir/vaulticon/icon.svg"));
}
