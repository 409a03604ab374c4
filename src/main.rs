//! figura command-line driver.
//!
//! Reads a pivot point and a scale factor from standard input, reports the
//! demo shapes, scales them about the pivot and reports them again.
//!
//! Usage:
//! ```text
//! echo "0 0 2" | figura
//! echo "0 0 2" | FIGURA_PI=legacy figura      # ellipse area with pi = 3.14
//! echo "0 0 2" | RUST_LOG=figura=debug figura
//! ```
//!
//! Exit status: 0 success, 1 bad input, 2 allocation failure,
//! 3 invalid argument, 4 output failure.

use std::io::{self, Read, Write};
use std::process::ExitCode;

use figura::geometry::{Ellipse, Polygon, Rectangle, ShapeList};
use figura::math::{PiApproximation, Point2};
use figura::operations::transform::ScaleAboutPoint;
use figura::report::write_report;
use figura::{FiguraError, Result};
use tracing::{info, warn};

const EXIT_BAD_INPUT: u8 = 1;
const EXIT_ALLOCATION: u8 = 2;
const EXIT_INVALID_ARGUMENT: u8 = 3;
const EXIT_OUTPUT: u8 = 4;

/// Environment variable selecting the pi approximation for ellipses.
const PI_ENV: &str = "FIGURA_PI";

fn main() -> ExitCode {
    // Default: WARN for everything, INFO for figura. Logs go to stderr.
    // Override with RUST_LOG env var (e.g. RUST_LOG=figura=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("figura=info".parse().unwrap_or_default());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let mut input = String::new();
    let parsed = io::stdin()
        .read_to_string(&mut input)
        .ok()
        .and_then(|_| parse_input(&input));
    let Some((pivot, factor)) = parsed else {
        eprintln!("Bad input");
        return ExitCode::from(EXIT_BAD_INPUT);
    };

    match run(pivot, factor, pi_from_env()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(exit_code(&e))
        }
    }
}

fn run(pivot: Point2, factor: f64, pi: PiApproximation) -> Result<()> {
    let mut shapes = demo_shapes(pi)?;
    info!(count = shapes.len(), ?pi, "built demo shapes");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &shapes)?;
    ScaleAboutPoint::new(pivot, factor).execute(&mut shapes)?;
    write_report(&mut out, &shapes)?;
    out.flush()?;
    Ok(())
}

/// Builds the fixed rectangle, trapezoid and ellipse reported by the driver.
fn demo_shapes(pi: PiApproximation) -> Result<ShapeList> {
    let trapezoid = [
        Point2::new(0.0, 0.0),
        Point2::new(4.0, 0.0),
        Point2::new(4.0, 6.0),
        Point2::new(0.0, 3.0),
    ];
    let shapes: ShapeList = vec![
        Box::new(Rectangle::new(2.0, 8.0, Point2::new(10.0, 0.0))?),
        Box::new(Polygon::new(&trapezoid)?),
        Box::new(Ellipse::new(3.0, 2.0, Point2::new(-2.0, 0.0))?.with_pi(pi)),
    ];
    Ok(shapes)
}

/// Parses `x y k` from the first three whitespace-separated tokens.
///
/// Returns `None` unless all three are finite numbers and `k > 0`.
fn parse_input(input: &str) -> Option<(Point2, f64)> {
    let mut tokens = input.split_whitespace().map(str::parse::<f64>);
    let x = tokens.next()?.ok()?;
    let y = tokens.next()?.ok()?;
    let k = tokens.next()?.ok()?;
    if !(x.is_finite() && y.is_finite() && k.is_finite()) || k <= 0.0 {
        return None;
    }
    Some((Point2::new(x, y), k))
}

fn pi_from_env() -> PiApproximation {
    match std::env::var(PI_ENV) {
        Ok(value) => value.parse().unwrap_or_else(|e| {
            warn!("{PI_ENV}: {e}, using exact pi");
            PiApproximation::default()
        }),
        Err(_) => PiApproximation::default(),
    }
}

fn exit_code(e: &FiguraError) -> u8 {
    match e {
        FiguraError::InvalidArgument(_) => EXIT_INVALID_ARGUMENT,
        FiguraError::Allocation(_) => EXIT_ALLOCATION,
        FiguraError::Io(_) => EXIT_OUTPUT,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use figura::InvalidArgument;

    #[test]
    fn parses_three_numbers() {
        let (p, k) = parse_input("1.5 -2\n3\n").unwrap();
        assert_eq!(p, Point2::new(1.5, -2.0));
        assert!((k - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn ignores_trailing_tokens() {
        assert!(parse_input("0 0 2 garbage").is_some());
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_input("").is_none());
        assert!(parse_input("1 2").is_none());
        assert!(parse_input("1 two 3").is_none());
        assert!(parse_input("0 0 0").is_none());
        assert!(parse_input("0 0 -1").is_none());
        assert!(parse_input("nan 0 1").is_none());
    }

    #[test]
    fn demo_shapes_build() {
        let shapes = demo_shapes(PiApproximation::Legacy).unwrap();
        assert_eq!(shapes.len(), 3);
    }

    #[test]
    fn exit_codes() {
        let e: FiguraError = InvalidArgument::EmptyCollection.into();
        assert_eq!(exit_code(&e), EXIT_INVALID_ARGUMENT);
        let e: FiguraError = io::Error::other("closed").into();
        assert_eq!(exit_code(&e), EXIT_OUTPUT);
        let e: FiguraError = Vec::<u8>::new().try_reserve(usize::MAX).unwrap_err().into();
        assert_eq!(exit_code(&e), EXIT_ALLOCATION);
    }
}
