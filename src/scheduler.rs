//! # Poll loop
//! A fixed-interval job that runs one cycle at a time on the calling thread.
//! Each cycle runs inside its own fault boundary, so neither an error nor a
//! panic can stop the loop.

use chrono::{DateTime, Utc};
use log::{debug, error, info, warn};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::thread;
use std::time::Duration;

use crate::error::CycleError;
use crate::readings::Report;

pub struct Job {
    name: String,
    interval: Duration,
    run: Box<dyn FnMut() -> Result<Report, CycleError> + Send + 'static>,
    cycles: u64,
    failures: u64,
    last_success: Option<DateTime<Utc>>,
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "panic with a non-string payload".to_string()
    }
}

/// Replace the default panic hook, which writes to stderr, with a debug log
/// line. The fault itself is logged by [`Job::tick`].
pub fn quiet_panics() {
    panic::set_hook(Box::new(|info| debug!("{info}")));
}

impl Job {
    pub fn new<T>(name: &str, interval: Duration, run: T) -> Job
    where
        T: FnMut() -> Result<Report, CycleError> + Send + 'static,
    {
        Job {
            name: name.to_string(),
            interval,
            run: Box::new(run),
            cycles: 0,
            failures: 0,
            last_success: None,
        }
    }

    /// Consecutive failed cycles since the last success.
    pub fn failures(&self) -> u64 {
        self.failures
    }

    pub fn last_success(&self) -> Option<DateTime<Utc>> {
        self.last_success
    }

    /// Run a single cycle and report its outcome. Successful reports go to
    /// stdout, failures to the error log.
    pub fn tick(&mut self) -> Result<Report, CycleError> {
        self.cycles += 1;
        info!("{name}: cycle {n}", name = self.name, n = self.cycles);

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| (self.run)()))
            .unwrap_or_else(|payload| Err(CycleError::Fault(panic_message(payload))));

        match &outcome {
            Ok(report) => {
                println!("{report}");
                self.failures = 0;
                self.last_success = Some(Utc::now());
            }
            Err(err) => {
                error!("{name}: {err}", name = self.name);
                self.failures += 1;
                if self.failures > 1 {
                    match self.last_success {
                        Some(at) => warn!(
                            "{name}: {failures} cycles failed in a row, last success at {at}",
                            name = self.name,
                            failures = self.failures
                        ),
                        None => warn!(
                            "{name}: {failures} cycles failed in a row, no success yet",
                            name = self.name,
                            failures = self.failures
                        ),
                    }
                }
            }
        }
        outcome
    }

    /// Tick, sleep, repeat. Never returns.
    pub fn run(mut self) -> ! {
        loop {
            let _ = self.tick();
            debug!("{name}: sleeping for {:?} ...", self.interval, name = self.name);
            thread::sleep(self.interval);
        }
    }
}
