use anyhow::Result;
use common::{Config, Report, WordFrequencyMap};
use std::{
    io::{self, BufRead, Write},
    path::Path,
    time::{Duration, Instant},
};
use time::macros::format_description;
use tracing::{info, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::LocalTime;

pub const LOG_FILE: &str = "text-analysis.log";

/// Installs the global subscriber. Logs go to `log_dir/text-analysis.log` when
/// a directory is given, otherwise to stderr; stdout is left to the report.
///
/// Keep the returned guard alive until exit or buffered lines are lost.
pub fn init_logger(level: Level, log_dir: Option<&Path>) -> WorkerGuard {
    let timer = LocalTime::new(format_description!(
        "[hour]:[minute]:[second].[subsecond digits:3]"
    ));
    let (writer, guard) = match log_dir {
        Some(dir) => {
            tracing_appender::non_blocking(tracing_appender::rolling::never(dir, LOG_FILE))
        }
        None => tracing_appender::non_blocking(std::io::stderr()),
    };
    tracing_subscriber::fmt()
        .with_timer(timer)
        .with_max_level(level)
        .with_ansi(log_dir.is_none())
        .with_writer(writer)
        .init();
    guard
}

/// Runs every line of `reader` through the map side and counts the survivors.
pub fn analyze_reader<R: BufRead>(reader: R, origin: &Path) -> Result<WordFrequencyMap> {
    count(common::lines(reader, origin))
}

pub fn analyze_file(path: &Path) -> Result<WordFrequencyMap> {
    count(common::open(path)?)
}

/// Analyzes `path` and writes the report followed by the timing line.
///
/// The whole file is counted before anything is written, so a failed read
/// leaves `out` untouched.
pub fn run<W: Write>(path: &Path, config: Config, out: &mut W) -> Result<Duration> {
    let start = Instant::now();
    info!("analyzing {}", path.display());
    let freq = analyze_file(path)?;
    let report = Report::new(&freq, config);
    write_report(out, &report, start.elapsed())?;
    let elapsed = start.elapsed();
    info!(?elapsed, "done");
    Ok(elapsed)
}

pub fn write_report<W: Write>(out: &mut W, report: &Report, elapsed: Duration) -> io::Result<()> {
    write!(out, "{}", report)?;
    writeln!(out)?;
    writeln!(out, "Processing time: {:.3}s", elapsed.as_secs_f64())
}

fn count(lines: impl Iterator<Item = Result<String>>) -> Result<WordFrequencyMap> {
    let mut freq = WordFrequencyMap::new();
    let mut n_lines = 0u64;
    for line in lines {
        freq.extend(app_wc::map(&line?));
        n_lines += 1;
    }
    info!(
        lines = n_lines,
        words = freq.total(),
        distinct = freq.len(),
        "pass complete"
    );
    Ok(freq)
}
