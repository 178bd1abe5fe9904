use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use sm_io::{random_pair, read_matrix_pair, write_diagonal, write_labeled};
use sm_matrix::{linear_multiply, multiply_with_stats, verify_views, Arena, OpStats, View};
use tracing::info;

use crate::config::{InputSource, RunConfig};
use crate::flags::DebugFlags;

/// Run `f`, reporting `label: <s>s <ms>ms` to `out` when `report` is set.
fn timed<T>(
    out: &mut impl Write,
    report: bool,
    label: &str,
    f: impl FnOnce() -> T,
) -> Result<T> {
    let start = Instant::now();
    let value = f();
    if report {
        writeln!(out, "{}: {}", label, format_elapsed(start.elapsed()))?;
    }
    Ok(value)
}

fn format_elapsed(elapsed: Duration) -> String {
    format!("{}s {}ms", elapsed.as_secs(), elapsed.subsec_millis())
}

/// Load the inputs, multiply, and report according to `config.flags`.
///
/// # Errors
/// Fails if the inputs cannot be loaded, if output cannot be written, or if
/// VERIFY is set and the Strassen product differs from the naive one.
pub fn run(config: &RunConfig, out: &mut impl Write) -> Result<()> {
    let flags = config.flags;
    let dimension = config.dimension;

    let (a, b) = match &config.source {
        InputSource::Random { seed } => random_pair(dimension, *seed),
        InputSource::File(path) => read_matrix_pair(path, dimension)
            .with_context(|| format!("unable to read matrices from {}", path.display()))?,
    };
    info!(dimension, cutoff = config.cutoff, debug = flags.bits(), flags = %flags, "inputs ready");

    let mut arena = Arena::new();
    let a_id = arena.insert(a);
    let b_id = arena.insert(b);

    let mut stats = OpStats::new();
    let report_time = flags.contains(DebugFlags::TIME);
    let c = timed(out, report_time, "strassen", || {
        multiply_with_stats(&mut arena, a_id, b_id, config.cutoff, &mut stats)
    })?;

    if flags.contains(DebugFlags::PRINT) {
        write_labeled(out, "A", arena.buffer(a_id))?;
        write_labeled(out, "B", arena.buffer(b_id))?;
        write_labeled(out, "C", &c.to_buffer(&arena))?;
    }

    if flags.contains(DebugFlags::VERIFY) {
        let check_id = arena.alloc(dimension);
        let a_view = View::of(&arena, a_id);
        let b_view = View::of(&arena, b_id);
        let check = View::of(&arena, check_id);
        let mut linear_stats = OpStats::new();
        timed(out, report_time, "linear", || {
            linear_multiply(&mut arena, a_view, b_view, check);
            linear_stats.record_naive(dimension);
        })?;

        if flags.contains(DebugFlags::PRINT) {
            write_labeled(out, "check", arena.buffer(check_id))?;
        }
        verify_views(&arena, check, c).context("strassen result differs from linear multiply")?;
        info!("verification passed");

        if flags.contains(DebugFlags::STATS) {
            writeln!(out, "linear stats:")?;
            write!(out, "{}", linear_stats)?;
        }
    }

    if flags.contains(DebugFlags::STATS) {
        writeln!(out, "strassen stats:")?;
        write!(out, "{}", stats)?;
    }

    if flags.is_empty() {
        write_diagonal(out, &c.to_buffer(&arena))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn config(flags: DebugFlags, dimension: usize, cutoff: usize, source: InputSource) -> RunConfig {
        RunConfig {
            dimension,
            cutoff,
            source,
            flags,
        }
    }

    fn run_to_string(config: &RunConfig) -> Result<String> {
        let mut out = Vec::new();
        run(config, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    fn entries_file(values: &[i64]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for v in values {
            writeln!(file, "{}", v).unwrap();
        }
        file
    }

    #[test]
    fn test_diagonal_only_by_default() {
        let file = entries_file(&[1, 2, 3, 4, 5, 6, 7, 8]);
        let cfg = config(
            DebugFlags::default(),
            2,
            1,
            InputSource::File(file.path().to_path_buf()),
        );
        assert_eq!(run_to_string(&cfg).unwrap(), "19\n50\n");
    }

    #[test]
    fn test_print_and_verify() {
        let file = entries_file(&[1, 2, 3, 4, 5, 6, 7, 8]);
        let cfg = config(
            DebugFlags::PRINT | DebugFlags::VERIFY,
            2,
            1,
            InputSource::File(file.path().to_path_buf()),
        );
        let text = run_to_string(&cfg).unwrap();
        assert!(text.contains("A:\n1 2 \n3 4 \n"));
        assert!(text.contains("B:\n5 6 \n7 8 \n"));
        assert!(text.contains("C:\n19 22 \n43 50 \n"));
        assert!(text.contains("check:\n19 22 \n43 50 \n"));
    }

    #[test]
    fn test_random_verify_odd_dimension() {
        let cfg = config(
            DebugFlags::RANDOM | DebugFlags::VERIFY,
            37,
            4,
            InputSource::Random { seed: Some(9) },
        );
        assert_eq!(run_to_string(&cfg).unwrap(), "");
    }

    #[test]
    fn test_time_report() {
        let cfg = config(
            DebugFlags::RANDOM | DebugFlags::VERIFY | DebugFlags::TIME,
            8,
            2,
            InputSource::Random { seed: Some(1) },
        );
        let text = run_to_string(&cfg).unwrap();
        assert!(text.starts_with("strassen: 0s "));
        assert!(text.contains("linear: 0s "));
    }

    #[test]
    fn test_stats_report() {
        let cfg = config(
            DebugFlags::RANDOM | DebugFlags::STATS,
            4,
            2,
            InputSource::Random { seed: Some(1) },
        );
        let text = run_to_string(&cfg).unwrap();
        assert!(text.contains("strassen stats:\n"));
        assert!(text.contains("naive_blocks: 7\n"));
        assert!(!text.contains("linear stats:"));
    }

    #[test]
    fn test_missing_file_fails() {
        let cfg = config(
            DebugFlags::default(),
            2,
            1,
            InputSource::File(PathBuf::from("/nonexistent/strassen-input.txt")),
        );
        let err = run_to_string(&cfg).unwrap_err();
        assert!(err.to_string().contains("unable to read matrices"));
    }

    #[test]
    fn test_short_file_fails() {
        let file = entries_file(&[1, 2, 3]);
        let cfg = config(
            DebugFlags::default(),
            2,
            1,
            InputSource::File(file.path().to_path_buf()),
        );
        assert!(run_to_string(&cfg).is_err());
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::from_millis(2345)), "2s 345ms");
    }
}
