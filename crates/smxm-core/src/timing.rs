use std::time::Instant;

use serde::{Deserialize, Serialize};

/// Phase durations of one benchmark run, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimingReport {
    pub total: f64,
    pub initialization: f64,
    pub computation: f64,
}

/// Monotonic timestamps taken at the phase boundaries of a run.
///
/// `t0` start of initialization, `t1` end of initialization, `t2` start of
/// computation, `t3` end of computation.
#[derive(Debug, Clone, Copy)]
pub struct PhaseClock {
    t0: Instant,
    t1: Option<Instant>,
    t2: Option<Instant>,
    t3: Option<Instant>,
}

impl PhaseClock {
    pub fn start() -> Self {
        Self {
            t0: Instant::now(),
            t1: None,
            t2: None,
            t3: None,
        }
    }

    pub fn end_initialization(&mut self) {
        self.t1 = Some(Instant::now());
    }

    pub fn start_computation(&mut self) {
        self.t2 = Some(Instant::now());
    }

    pub fn end_computation(&mut self) {
        self.t3 = Some(Instant::now());
    }

    /// Durations derived from the recorded marks. A mark that was never
    /// recorded is taken to be the previous one.
    pub fn report(&self) -> TimingReport {
        let t1 = self.t1.unwrap_or(self.t0);
        let t2 = self.t2.unwrap_or(t1);
        let t3 = self.t3.unwrap_or(t2);

        TimingReport {
            total: t3.duration_since(self.t0).as_secs_f64(),
            initialization: t1.duration_since(self.t0).as_secs_f64(),
            computation: t3.duration_since(t2).as_secs_f64(),
        }
    }
}
