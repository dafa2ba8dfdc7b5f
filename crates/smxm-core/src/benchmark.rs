use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::BenchConfig;
use crate::error::{BenchError, Result};
use crate::math::{initialize, multiply, Matrix};
use crate::memory::MemoryReport;
use crate::report::BenchReport;
use crate::timing::PhaseClock;

/// The serial MXM workload: two random N x N operands, one product, timed.
///
/// Each call to [`MatrixBenchmark::run`] reseeds the fill generator, so every
/// repetition multiplies the same pair of matrices.
#[derive(Debug, Clone)]
pub struct MatrixBenchmark {
    n: usize,
    seed: u64,
}

impl MatrixBenchmark {
    pub fn new(n: usize, seed: u64) -> Result<Self> {
        if n == 0 {
            return Err(BenchError::InvalidArgument(
                "Matrix size must be a positive integer.".to_string(),
            ));
        }
        Ok(Self { n, seed })
    }

    pub fn from_config(config: &BenchConfig) -> Result<Self> {
        config.validate()?;
        Self::new(config.matrix_size, resolve_seed(config.seed))
    }

    pub fn matrix_size(&self) -> usize {
        self.n
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Run the pipeline once and report timing and peak memory.
    ///
    /// The three matrices are owned by this call and dropped before it
    /// returns, on success and on every error path.
    pub fn run(&self) -> Result<BenchReport> {
        let n = self.n;
        let started_at = Utc::now();

        let mut a = Matrix::try_zeros(n)?;
        let mut b = Matrix::try_zeros(n)?;
        let mut c = Matrix::try_zeros(n)?;
        log::debug!(
            "Allocated three {}x{} matrices ({} bytes each)",
            n,
            n,
            a.size_in_bytes()
        );

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut clock = PhaseClock::start();
        initialize(&mut a, &mut rng);
        initialize(&mut b, &mut rng);
        clock.end_initialization();

        clock.start_computation();
        multiply(&a, &b, &mut c)?;
        clock.end_computation();

        let timing = clock.report();
        let memory = MemoryReport::sample();
        let finished_at = Utc::now();
        log::debug!(
            "N={} init={:.6}s compute={:.6}s peak_rss={:?}kB",
            n,
            timing.initialization,
            timing.computation,
            memory.peak_rss_kb
        );

        Ok(BenchReport {
            matrix_size: n,
            seed: self.seed,
            timing,
            memory,
            started_at,
            finished_at,
        })
    }
}

/// Use the configured seed, or draw a fresh one so the run can still be
/// reproduced from the logged value.
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    match seed {
        Some(seed) => seed,
        None => {
            let seed = rand::random::<u64>();
            log::info!("No seed given; using seed {}", seed);
            seed
        }
    }
}

/// Run the benchmark `config.repetitions` times.
///
/// Stops at the first failing run; no report is returned for a failed series.
pub fn run(config: &BenchConfig) -> Result<Vec<BenchReport>> {
    let bench = MatrixBenchmark::from_config(config)?;
    log::info!(
        "Running {}x{} matrix multiplication {} time(s), seed {}",
        bench.matrix_size(),
        bench.matrix_size(),
        config.repetitions,
        bench.seed()
    );

    let mut reports = Vec::with_capacity(config.repetitions);
    for rep in 0..config.repetitions {
        log::trace!("Repetition {}/{}", rep + 1, config.repetitions);
        reports.push(bench.run()?);
    }
    Ok(reports)
}
