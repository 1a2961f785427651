//! firstmove - emit board arrow shapes for a drawing surface.
//!
//! Prints either a `ground.setShapes([...]);` statement for a page script or
//! the bare JSON shape array.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use firstmove_shapes::logging::{init_logging, LoggingConfig};
use firstmove_shapes::{
    Arrows, Brush, DrawingSurface, JsonSurface, ScriptSurface, SquareId, SurfaceError,
    ARROW_BRUSH,
};

/// Argument standing for "no destination" (point marker on the origin).
const NO_DEST: &str = "-";

/// Build arrows from one origin square to each destination square
#[derive(Parser, Debug)]
#[command(name = "firstmove")]
#[command(about = "Emit board arrow shapes as a setShapes statement or JSON")]
struct Cli {
    /// Origin square, e.g. d5
    #[arg(required_unless_present = "clear")]
    origin: Option<String>,

    /// Destination squares; `-` draws a point marker on the origin
    destinations: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Script)]
    format: Format,

    /// Board widget variable used in script output
    #[arg(short, long, default_value = firstmove_shapes::surface::DEFAULT_BINDING)]
    binding: String,

    /// Brush name for every shape
    #[arg(long)]
    brush: Option<String>,

    /// Emit the clear statement instead of arrows
    #[arg(long)]
    clear: bool,

    /// Indent JSON output
    #[arg(long)]
    pretty: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Script,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(logging_config(&cli));

    emit(&cli, io::stdout().lock())?;
    Ok(())
}

fn logging_config(cli: &Cli) -> LoggingConfig {
    if cli.verbose {
        LoggingConfig::with_filter("debug")
    } else {
        LoggingConfig::default()
    }
}

/// Sends the requested shape set to a surface of the chosen format over `out`.
fn emit<W: Write>(cli: &Cli, out: W) -> Result<W> {
    match cli.format {
        Format::Script => {
            let mut surface = ScriptSurface::new(out).binding(cli.binding.clone());
            run(cli, &mut surface)?;
            check(surface.take_error())?;
            Ok(surface.into_inner())
        }
        Format::Json => {
            let mut surface = JsonSurface::new(out).pretty(cli.pretty);
            run(cli, &mut surface)?;
            check(surface.take_error())?;
            Ok(surface.into_inner())
        }
    }
}

fn run<S: DrawingSurface>(cli: &Cli, surface: S) -> Result<()> {
    let brush = cli.brush.as_deref().map_or(ARROW_BRUSH, Brush::from);
    let mut arrows = Arrows::with_brush(surface, brush);

    if cli.clear {
        arrows.clear();
        return Ok(());
    }

    let origin = cli.origin.as_deref().map(str::trim).unwrap_or_default();
    anyhow::ensure!(!origin.is_empty(), "origin square must not be empty");
    arrows.render(&SquareId::from(origin), parse_destinations(&cli.destinations));
    Ok(())
}

/// Maps command-line destinations to optional squares, `-` meaning none.
fn parse_destinations(args: &[String]) -> Vec<Option<SquareId>> {
    args.iter()
        .map(|a| a.trim())
        .map(|a| (a != NO_DEST && !a.is_empty()).then(|| SquareId::from(a)))
        .collect()
}

fn check(err: Option<SurfaceError>) -> Result<()> {
    match err {
        Some(e) => Err(e).context("emitting shapes"),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use firstmove_shapes::RecordingSurface;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("firstmove").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn dash_is_point_marker() {
        let parsed = parse_destinations(&["e4".into(), "-".into()]);
        assert_eq!(parsed, vec![Some(SquareId::from("e4")), None]);
    }

    #[test]
    fn defaults() {
        let c = cli(&["d5", "e4"]);
        assert_eq!(c.format, Format::Script);
        assert_eq!(c.binding, "ground");
        assert!(!c.clear);
    }

    #[test]
    fn run_renders_to_surface() {
        let c = cli(&["d5", "e4", "-", "--brush", "red"]);
        let mut surface = RecordingSurface::new();
        run(&c, &mut surface).unwrap();
        let shown = surface.current();
        assert_eq!(shown.len(), 2);
        assert!(shown.items()[1].is_point());
        assert!(shown.iter().all(|s| s.brush == Brush::Red));
    }

    #[test]
    fn run_clear_sends_empty() {
        let c = cli(&["d5", "e4", "--clear"]);
        let mut surface = RecordingSurface::new();
        run(&c, &mut surface).unwrap();
        assert_eq!(surface.calls(), 1);
        assert!(surface.current().is_empty());
    }

    #[test]
    fn json_format_flag() {
        let c = cli(&["d4", "--format", "json", "--pretty"]);
        assert_eq!(c.format, Format::Json);
        assert!(c.pretty);
    }

    fn emitted(args: &[&str]) -> String {
        String::from_utf8(emit(&cli(args), Vec::new()).unwrap()).unwrap()
    }

    // ── clear ─────────────────────────────────────────────────────────────

    #[test]
    fn clear_needs_no_origin() {
        let c = cli(&["--clear"]);
        assert!(c.origin.is_none());
        assert_eq!(emitted(&["--clear"]), "ground.setShapes([]);\n");
    }

    #[test]
    fn origin_required_without_clear() {
        assert!(Cli::try_parse_from(["firstmove"]).is_err());
    }

    // ── origin validation ─────────────────────────────────────────────────

    #[test]
    fn blank_origin_rejected_before_output() {
        let c = cli(&["  ", "e4"]);
        let mut surface = RecordingSurface::new();
        assert!(run(&c, &mut surface).is_err());
        assert_eq!(surface.calls(), 0);
        assert!(emit(&c, Vec::new()).is_err());
    }

    // ── output ────────────────────────────────────────────────────────────

    #[test]
    fn binding_flag_reaches_script() {
        let out = emitted(&["d5", "e4", "--binding", "board"]);
        assert!(out.starts_with("board.setShapes("));
    }

    #[test]
    fn json_output_is_bare_array() {
        let out = emitted(&["d5", "e4", "-", "--format", "json"]);
        assert_eq!(
            out,
            "[{\"orig\":\"d5\",\"dest\":\"e4\",\"brush\":\"blue\"},{\"orig\":\"d5\",\"brush\":\"blue\"}]\n"
        );
    }

    // ── logging ───────────────────────────────────────────────────────────

    #[test]
    fn verbose_selects_debug_filter() {
        assert_eq!(logging_config(&cli(&["d5", "-v"])).env_filter.as_deref(), Some("debug"));
        assert_eq!(logging_config(&cli(&["d5"])).env_filter, None);
    }
}
