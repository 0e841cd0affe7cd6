//! Timed execution of puzzle parts
//!
//! [`TimedRunner::run`] invokes each part's solve operation in order,
//! measures its wall-clock duration and writes a banner-framed report to a
//! [`LogSink`]. The layout of a two-part run:
//!
//! ```text
//! >>>>>>>>>>>>>>>>>>>>>>>>>>>>>>
//! ------------------------------
//! vvvvvvvvvvvvvvvvvvvvvvvvvvvvvv
//!
//! Part1:
//! <answer 1>
//!
//! Part2:
//! <answer 2>
//!
//! Part1: 0.8123 ms
//! Part2: 14.0571 ms
//! <<<<<<<<<<<<<<<<<<<<<<<<<<<<<<
//! ```
//!
//! Anything a solver prints while running lands between the top banner and
//! the `v` banner. A separator line is written between consecutive parts.

use crate::error::{RunError, SolveError};
use crate::sink::LogSink;
use std::time::{Duration, Instant};

/// Written before the first part starts
pub const TOP_BANNER: &str = ">>>>>>>>>>>>>>>>>>>>>>>>>>>>>>";
/// Written between two executed parts
pub const SEPARATOR: &str = "------------------------------";
/// Written after the last part finished, before the results
pub const RESULTS_BANNER: &str = "vvvvvvvvvvvvvvvvvvvvvvvvvvvvvv";
/// Closes the report
pub const END_BANNER: &str = "<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<";

/// Label used in errors for parts without one
const UNLABELED: &str = "Day";

/// Zero-argument solve operation of a part
pub type SolveFn<'a> = Box<dyn FnOnce() -> Result<String, SolveError> + 'a>;

/// One unit of work for the runner: an optional label and its solve operation
pub struct Part<'a> {
    label: Option<String>,
    solve: SolveFn<'a>,
}

impl<'a> Part<'a> {
    /// A part reported as `<label>:` above its result
    pub fn labeled<F>(label: impl Into<String>, solve: F) -> Self
    where
        F: FnOnce() -> Result<String, SolveError> + 'a,
    {
        Self {
            label: Some(label.into()),
            solve: Box::new(solve),
        }
    }

    /// A part whose result and timing are reported without a label
    pub fn unlabeled<F>(solve: F) -> Self
    where
        F: FnOnce() -> Result<String, SolveError> + 'a,
    {
        Self {
            label: None,
            solve: Box::new(solve),
        }
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl std::fmt::Debug for Part<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Part")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Outcome of one timed part
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub label: Option<String>,
    pub result_text: String,
    pub elapsed: Duration,
}

impl RunReport {
    /// Elapsed wall-clock time in floating-point milliseconds
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_nanos() as f64 / 1_000_000.0
    }

    /// `Part1: 1.25 ms`, or `1.25 ms` when unlabeled
    pub fn timing_line(&self) -> String {
        match &self.label {
            Some(label) => format!("{}: {} ms", label, self.elapsed_ms()),
            None => format!("{} ms", self.elapsed_ms()),
        }
    }
}

/// How timing lines are written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimingStyle {
    /// One line per part
    #[default]
    PerLine,
    /// Both timings on one line when exactly two parts ran, else one per line
    Combined,
}

/// Formatting options for the report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportLayout {
    pub timing_style: TimingStyle,
}

/// Runs parts sequentially and reports their results and timings
#[derive(Debug, Clone, Default)]
pub struct TimedRunner {
    layout: ReportLayout,
}

impl TimedRunner {
    pub fn new(layout: ReportLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> ReportLayout {
        self.layout
    }

    /// Time every part in order, then write the report
    ///
    /// A failing part aborts the run: its error is returned right away and
    /// neither results nor timing lines are written.
    pub fn run<S>(&self, parts: Vec<Part<'_>>, sink: &mut S) -> Result<Vec<RunReport>, RunError>
    where
        S: LogSink + ?Sized,
    {
        sink.log(TOP_BANNER);

        let mut reports = Vec::with_capacity(parts.len());
        for (index, part) in parts.into_iter().enumerate() {
            if index > 0 {
                sink.log(SEPARATOR);
            }
            reports.push(time_part(part)?);
        }

        self.write_report(&reports, sink);
        Ok(reports)
    }

    fn write_report<S>(&self, reports: &[RunReport], sink: &mut S)
    where
        S: LogSink + ?Sized,
    {
        sink.log(RESULTS_BANNER);

        if reports.is_empty() {
            sink.log(END_BANNER);
            return;
        }

        for report in reports {
            sink.log("");
            if let Some(label) = &report.label {
                sink.log_fmt(format_args!("{}:", label));
            }
            sink.log(&report.result_text);
        }
        sink.log("");

        match (self.layout.timing_style, reports) {
            (TimingStyle::Combined, [first, second]) => {
                sink.log_fmt(format_args!(
                    "{} | {}",
                    first.timing_line(),
                    second.timing_line()
                ));
            }
            _ => {
                for report in reports {
                    sink.log(&report.timing_line());
                }
            }
        }

        sink.log(END_BANNER);
    }
}

fn time_part(part: Part<'_>) -> Result<RunReport, RunError> {
    let Part { label, solve } = part;
    let name = label.as_deref().unwrap_or(UNLABELED);
    tracing::debug!(part = name, "solving");

    let start = Instant::now();
    let outcome = solve();
    let elapsed = start.elapsed();

    let result_text = outcome.map_err(|source| RunError::PartFailed {
        label: name.to_string(),
        source,
    })?;
    tracing::debug!(part = name, elapsed_ms = elapsed.as_secs_f64() * 1000.0, "solved");

    Ok(RunReport {
        label,
        result_text,
        elapsed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::thread;

    fn ok(answer: &str) -> impl FnOnce() -> Result<String, SolveError> + '_ {
        move || Ok(answer.to_string())
    }

    fn parse_ms(line: &str) -> f64 {
        let value = line
            .rsplit(": ")
            .next()
            .and_then(|s| s.strip_suffix(" ms"))
            .unwrap();
        value.parse().unwrap()
    }

    #[test]
    fn test_two_part_layout() {
        let mut lines: Vec<String> = Vec::new();
        let reports = TimedRunner::default()
            .run(
                vec![Part::labeled("Part1", ok("A")), Part::labeled("Part2", ok("B"))],
                &mut lines,
            )
            .unwrap();

        assert_eq!(reports.len(), 2);
        assert_eq!(
            lines[..12],
            [
                TOP_BANNER,
                SEPARATOR,
                RESULTS_BANNER,
                "",
                "Part1:",
                "A",
                "",
                "Part2:",
                "B",
                "",
                reports[0].timing_line().as_str(),
                reports[1].timing_line().as_str(),
            ]
        );
        assert_eq!(lines.last().unwrap(), END_BANNER);
        assert_eq!(lines.len(), 13);
        assert!(lines[10].starts_with("Part1: ") && lines[10].ends_with(" ms"));
        assert!(lines[11].starts_with("Part2: ") && lines[11].ends_with(" ms"));
    }

    #[test]
    fn test_results_keep_input_order() {
        let mut lines: Vec<String> = Vec::new();
        TimedRunner::default()
            .run(
                vec![Part::labeled("Part1", ok("A")), Part::labeled("Part2", ok("B"))],
                &mut lines,
            )
            .unwrap();

        let a = lines.iter().position(|l| l == "A").unwrap();
        let b = lines.iter().position(|l| l == "B").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_parts_run_sequentially_in_order() {
        let calls = Cell::new(0u32);
        let parts = vec![
            Part::labeled("Part1", || {
                assert_eq!(calls.replace(1), 0);
                Ok("first".into())
            }),
            Part::labeled("Part2", || {
                assert_eq!(calls.replace(2), 1);
                Ok("second".into())
            }),
        ];

        let reports = TimedRunner::default().run(parts, &mut Vec::<String>::new()).unwrap();
        assert_eq!(calls.get(), 2);
        assert_eq!(reports[0].result_text, "first");
        assert_eq!(reports[1].result_text, "second");
    }

    #[test]
    fn test_zero_parts_writes_only_banners() {
        let mut lines: Vec<String> = Vec::new();
        let reports = TimedRunner::default().run(Vec::new(), &mut lines).unwrap();

        assert!(reports.is_empty());
        assert_eq!(lines, vec![TOP_BANNER, RESULTS_BANNER, END_BANNER]);
    }

    #[test]
    fn test_single_unlabeled_part() {
        let mut lines: Vec<String> = Vec::new();
        let reports = TimedRunner::default()
            .run(vec![Part::unlabeled(ok("1234"))], &mut lines)
            .unwrap();

        assert_eq!(reports[0].label, None);
        assert_eq!(lines[..5], [TOP_BANNER, RESULTS_BANNER, "", "1234", ""]);
        assert!(!lines[5].contains(':'));
        assert!(lines[5].ends_with(" ms"));
        assert_eq!(lines[6], END_BANNER);
        assert_eq!(lines.len(), 7);
        assert!(!lines.contains(&SEPARATOR.to_string()));
    }

    #[test]
    fn test_failure_stops_run_without_timing_lines() {
        let second_ran = Cell::new(false);
        let mut lines: Vec<String> = Vec::new();
        let parts = vec![
            Part::labeled("Part1", || Err(SolveError::failed("no answer"))),
            Part::labeled("Part2", || {
                second_ran.set(true);
                Ok("unreachable".into())
            }),
        ];

        let err = TimedRunner::default().run(parts, &mut lines).unwrap_err();
        match err {
            RunError::PartFailed { label, source } => {
                assert_eq!(label, "Part1");
                assert!(matches!(source, SolveError::SolveFailed(_)));
            }
        }
        assert!(!second_ran.get());
        assert_eq!(lines, vec![TOP_BANNER]);
    }

    #[test]
    fn test_failure_in_second_part_reports_nothing() {
        let mut lines: Vec<String> = Vec::new();
        let parts = vec![
            Part::labeled("Part1", ok("fine")),
            Part::labeled("Part2", || Err(SolveError::PartNotImplemented(2))),
        ];

        let err = TimedRunner::default().run(parts, &mut lines).unwrap_err();
        assert_eq!(err.to_string(), "Part2 failed: no solution for part 2");
        assert!(lines.iter().all(|l| !l.ends_with(" ms")));
        assert!(!lines.contains(&"fine".to_string()));
    }

    #[test]
    fn test_unlabeled_failure_uses_day_label() {
        let err = TimedRunner::default()
            .run(
                vec![Part::unlabeled(|| Err(SolveError::PartOutOfRange(3)))],
                &mut Vec::<String>::new(),
            )
            .unwrap_err();
        assert!(err.to_string().starts_with("Day failed"));
    }

    #[test]
    fn test_elapsed_covers_sleep() {
        let delay = Duration::from_millis(15);
        let reports = TimedRunner::default()
            .run(
                vec![Part::labeled("Part1", move || {
                    thread::sleep(delay);
                    Ok("slept".into())
                })],
                &mut Vec::<String>::new(),
            )
            .unwrap();

        assert!(reports[0].elapsed >= delay);
    }

    #[test]
    fn test_busy_wait_answer_and_timing() {
        let mut lines: Vec<String> = Vec::new();
        let reports = TimedRunner::default()
            .run(
                vec![Part::unlabeled(|| {
                    let start = Instant::now();
                    while start.elapsed() < Duration::from_millis(10) {
                        std::hint::spin_loop();
                    }
                    Ok("42".into())
                })],
                &mut lines,
            )
            .unwrap();

        assert!(lines.contains(&"42".to_string()));
        let timing = lines.iter().find(|l| l.ends_with(" ms")).unwrap();
        assert!(parse_ms(timing) >= 10.0);
        assert!(reports[0].elapsed_ms() >= 10.0);
    }

    #[test]
    fn test_combined_timing_line() {
        let mut lines: Vec<String> = Vec::new();
        let runner = TimedRunner::new(ReportLayout {
            timing_style: TimingStyle::Combined,
        });
        let reports = runner
            .run(
                vec![Part::labeled("Part1", ok("A")), Part::labeled("Part2", ok("B"))],
                &mut lines,
            )
            .unwrap();

        let expected = format!(
            "{} | {}",
            reports[0].timing_line(),
            reports[1].timing_line()
        );
        assert_eq!(lines[lines.len() - 2], expected);
        assert_eq!(lines.iter().filter(|l| l.ends_with(" ms")).count(), 1);
    }

    #[test]
    fn test_combined_style_with_one_part_stays_per_line() {
        let mut lines: Vec<String> = Vec::new();
        let runner = TimedRunner::new(ReportLayout {
            timing_style: TimingStyle::Combined,
        });
        runner
            .run(vec![Part::labeled("Part2", ok("B"))], &mut lines)
            .unwrap();

        let timing = &lines[lines.len() - 2];
        assert!(timing.starts_with("Part2: "));
        assert!(!timing.contains('|'));
    }

    #[test]
    fn test_timing_line_format() {
        let report = RunReport {
            label: Some("Part1".into()),
            result_text: String::new(),
            elapsed: Duration::from_micros(1500),
        };
        assert_eq!(report.timing_line(), "Part1: 1.5 ms");

        let report = RunReport {
            label: None,
            ..report
        };
        assert_eq!(report.timing_line(), "1.5 ms");
    }
}
