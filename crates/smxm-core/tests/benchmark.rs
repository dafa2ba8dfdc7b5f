//! Integration tests for the end-to-end benchmark pipeline.

use smxm_core::stats::RunSummary;
use smxm_core::{run, BenchConfig, BenchError, MatrixBenchmark, OutputFormat};

#[test]
fn run_produces_one_report_per_repetition() {
    let mut config = BenchConfig::new(16).with_seed(7);
    config.repetitions = 3;
    let reports = run(&config).unwrap();
    assert_eq!(reports.len(), 3);
    for r in &reports {
        assert_eq!(r.matrix_size, 16);
        assert_eq!(r.seed, 7);
    }
}

#[test]
fn run_rejects_invalid_config() {
    assert!(matches!(
        run(&BenchConfig::new(0)),
        Err(BenchError::InvalidArgument(_))
    ));

    let mut config = BenchConfig::new(4);
    config.repetitions = 0;
    assert!(matches!(run(&config), Err(BenchError::InvalidArgument(_))));
}

#[test]
fn run_without_seed_records_generated_seed() {
    let reports = run(&BenchConfig::new(4)).unwrap();
    let bench = MatrixBenchmark::new(4, reports[0].seed).unwrap();
    assert_eq!(bench.seed(), reports[0].seed);
}

#[test]
fn timings_are_monotonic() {
    for n in [1, 8, 64] {
        let report = MatrixBenchmark::new(n, 1).unwrap().run().unwrap();
        let t = report.timing;
        assert!(t.initialization >= 0.0);
        assert!(t.computation >= 0.0);
        assert!(t.total >= t.initialization);
        assert!(t.total >= t.computation);
    }
}

#[cfg(target_os = "linux")]
#[test]
fn peak_memory_covers_three_matrices() {
    let n = 256;
    let report = MatrixBenchmark::new(n, 3).unwrap().run().unwrap();
    let minimum_kb = (3 * n * n * std::mem::size_of::<f64>() / 1024) as u64;
    let peak = report.memory.peak_rss_kb.expect("VmHWM is available on linux");
    assert!(
        peak >= minimum_kb,
        "peak {} kB below theoretical minimum {} kB",
        peak,
        minimum_kb
    );
}

#[test]
fn summary_over_repetitions() {
    let mut config = BenchConfig::new(8).with_seed(5);
    config.repetitions = 4;
    config.output = OutputFormat::Json;
    let reports = run(&config).unwrap();
    let summary = RunSummary::from_reports(&reports).unwrap();
    assert_eq!(summary.runs, 4);
    assert!(summary.computation.min <= summary.computation.mean);
    assert!(summary.computation.mean <= summary.computation.max);
    assert!(summary.total.std_dev >= 0.0);
}

#[test]
fn text_report_has_four_lines() {
    let report = MatrixBenchmark::new(2, 1).unwrap().run().unwrap();
    let mut out = Vec::new();
    report.write_text(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Total time: ") && lines[0].ends_with(" seconds"));
    assert!(lines[1].starts_with("Initialization time: "));
    assert!(lines[2].starts_with("Computation time: "));
    assert!(lines[3].starts_with("Memory usage: ") && lines[3].ends_with(" kilobytes"));
}
