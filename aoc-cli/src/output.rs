//! Report lines and the end-of-run summary

use crate::executor::{SolverResult, Verification};
use chrono::TimeDelta;

/// Counts over a finished run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub solved: usize,
    pub failed: usize,
    pub correct: usize,
    pub mismatched: usize,
}

impl RunSummary {
    pub fn from_results(results: &[SolverResult]) -> Self {
        results.iter().fold(Self::default(), |mut summary, result| {
            if result.answer.is_ok() {
                summary.solved += 1;
            } else {
                summary.failed += 1;
            }
            match result.verification {
                Some(Verification::Correct) => summary.correct += 1,
                Some(Verification::Incorrect { .. }) => summary.mismatched += 1,
                None => {}
            }
            summary
        })
    }

    /// A run succeeds when nothing failed and no answer contradicts a known one
    pub fn is_success(&self) -> bool {
        self.failed == 0 && self.mismatched == 0
    }
}

/// Prints results to stdout and failures to stderr
///
/// Quiet mode prints bare answers and skips the summary.
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    pub fn print_result(&self, result: &SolverResult) {
        if self.quiet {
            match &result.answer {
                Ok(answer) => println!("{}", answer),
                Err(e) => eprintln!("Error: {}", e),
            }
        } else {
            match format_result(result) {
                Ok(line) => println!("{line}"),
                Err(line) => eprintln!("{line}"),
            }
        }
    }

    /// Counts, summed parse and solve time, and wall-clock time since `new`
    ///
    /// The speed-up factor is compute time over wall-clock time, so it shows
    /// how much the thread pool overlapped work.
    pub fn print_summary(&self, results: &[SolverResult]) -> RunSummary {
        let summary = RunSummary::from_results(results);
        if self.quiet {
            return summary;
        }

        let total_parse_time: TimeDelta = results.iter().filter_map(|r| r.parse_duration).sum();
        let total_solve_time: TimeDelta = results.iter().map(|r| r.solve_duration).sum();
        let total_compute_time = total_parse_time + total_solve_time;
        let elapsed_time = self.start_time.elapsed();

        println!();
        println!("--- Summary ---");
        println!(
            "Parts: {} solved, {} failed",
            summary.solved, summary.failed
        );
        if summary.correct + summary.mismatched > 0 {
            println!(
                "Checked: {} correct, {} incorrect",
                summary.correct, summary.mismatched
            );
        }
        println!("Total parse time: {}", format_duration(total_parse_time));
        println!("Total solve time: {}", format_duration(total_solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(elapsed_time)
        );
        if !elapsed_time.is_zero() {
            let total_compute_secs =
                total_compute_time.num_microseconds().unwrap_or(0) as f64 / 1_000_000.0;
            let speedup = total_compute_secs / elapsed_time.as_secs_f64();
            println!("Speedup factor: {:.2}x", speedup);
        }
        summary
    }
}

/// One report line: `Ok` for stdout, `Err` for stderr
fn format_result(result: &SolverResult) -> Result<String, String> {
    let prefix = format!("{}/{:02} Part {}", result.year, result.day, result.part);

    match &result.answer {
        Ok(answer) => {
            let parse_timing = result
                .parse_duration
                .map(|d| format!("parse: {}, ", format_duration(d)))
                .unwrap_or_default();
            let verification = result
                .verification
                .as_ref()
                .map(|v| format!(" {}", format_verification(v)))
                .unwrap_or_default();

            Ok(format!(
                "{}: {} ({}solve: {}){}",
                prefix,
                answer,
                parse_timing,
                format_duration(result.solve_duration),
                verification
            ))
        }
        Err(e) => Err(format!("{}: Error - {}", prefix, e)),
    }
}

/// Shortest readable unit: `µs`, `ms` or `s`
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    TimeDelta::from_std(d).map_or_else(|_| "N/A".to_string(), format_duration)
}

fn format_verification(verification: &Verification) -> String {
    match verification {
        Verification::Correct => "✓ Correct".to_string(),
        Verification::Incorrect { expected } => format!("✗ Incorrect (expected {})", expected),
    }
}
