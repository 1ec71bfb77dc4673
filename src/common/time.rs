use std::fmt::Display;
use std::time::{Duration, Instant};

/// Measures how long a build or search phase takes.
///
/// Kept outside the containers: the driver wraps calls to `insert`/`frequency`
/// with it, the containers themselves never see a clock.
pub struct PhaseTimer {
    name: &'static str,
    start: Instant,
}

impl PhaseTimer {
    pub fn start(name: &'static str) -> Self {
        Self {
            name,
            start: Instant::now(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Runs `f` and returns its result together with the elapsed time.
    pub fn time<T>(name: &'static str, f: impl FnOnce() -> T) -> (T, PhaseTime) {
        let timer = Self::start(name);
        let result = f();
        (result, timer.stop())
    }

    pub fn stop(self) -> PhaseTime {
        let elapsed = self.start.elapsed();
        log::info!("{} took {:.6}s", self.name, elapsed.as_secs_f64());
        PhaseTime {
            name: self.name,
            elapsed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseTime {
    pub name: &'static str,
    pub elapsed: Duration,
}

impl PhaseTime {
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

impl Display for PhaseTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}", self.seconds())
    }
}
