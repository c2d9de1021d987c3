use std::error::Error;
use std::time::{Duration, Instant};

use colored::*;
use tracing::{error, info, span, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::RunConfig;
use crate::domain::solution::Solution;
use crate::error::EvalError;
use crate::evaluation::score::score_with;
use crate::setup::init::load_trip_records;

/// What a run measured, for printing.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreReport {
    pub score: f64,
    pub trips: usize,
    pub gifts: usize,
    pub elapsed: Duration,
}

impl ScoreReport {
    pub fn summary_line(&self) -> String {
        format!(
            "WRW = {:.0}  (Time: {:.2} seconds)",
            self.score,
            self.elapsed.as_secs_f64()
        )
    }
}

/// Initialize tracing
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_span_events(fmt::format::FmtSpan::CLOSE))
        .init();
}

/// Load both CSVs, join them and score the result. Timing covers loading too.
pub fn evaluate(config: &RunConfig) -> Result<ScoreReport, EvalError> {
    let start = Instant::now();

    let records = load_trip_records(&config.gifts_path, &config.solution_path)?;
    let solution = Solution::from_records(&records);
    let score = score_with(&solution, &config.options)?;

    Ok(ScoreReport {
        score,
        trips: solution.num_trips(),
        gifts: records.len(),
        elapsed: start.elapsed(),
    })
}

pub fn run(args: &[String]) -> Result<(), Box<dyn Error>> {
    init_tracing();

    let config = RunConfig::from_env(args)?;
    let run_span = span!(Level::INFO, "wrw_eval");
    let _guard = run_span.enter();

    info!(
        "Evaluating {} against {}",
        config.solution_path.display(),
        config.gifts_path.display()
    );

    match evaluate(&config) {
        Ok(report) => {
            info!("{} trips, {} gifts", report.trips, report.gifts);
            println!("{}", report.summary_line().green());
            Ok(())
        }
        Err(err) => {
            for v in err.violations() {
                error!("{}", v);
            }
            println!("{}", format!("Evaluation failed: {}", err).red());
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_line_format() {
        let report = ScoreReport {
            score: 144525525772.4,
            trips: 1,
            gifts: 1,
            elapsed: Duration::from_millis(1234),
        };
        assert_eq!(report.summary_line(), "WRW = 144525525772  (Time: 1.23 seconds)");
    }
}
