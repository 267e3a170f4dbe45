use std::time::Instant;

use thiserror::Error;

use crate::consts::TIME_STEP;
use crate::model::body::body_name;
use crate::model::{BodyID, NBodySystem};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DriverError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Parses the step count. Anything that isn't a non-negative integer is an
/// error; in particular, garbage is not treated as zero.
pub fn parse_step_count(arg: Option<&str>) -> Result<u64, DriverError> {
    let arg = match arg {
        Some(arg) => arg.trim(),
        None => {
            return Err(DriverError::InvalidArgument(
                "missing step count".to_owned(),
            ))
        }
    };

    arg.parse::<u64>().map_err(|_| {
        DriverError::InvalidArgument(format!(
            "step count must be a non-negative integer, got {:?}",
            arg
        ))
    })
}

pub fn format_energy(energy: f64) -> String {
    format!("{:.9}", energy)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyReport {
    pub steps: u64,
    pub initial: f64,
    pub last: f64,
}

impl EnergyReport {
    pub fn drift(&self) -> f64 {
        self.last - self.initial
    }
}

/// Runs the standard simulation: build the system, take `steps` steps of
/// `TIME_STEP`, and report the energy at both ends.
pub fn run(steps: u64) -> EnergyReport {
    let mut system = NBodySystem::new();
    let initial = system.energy();
    log::debug!("advancing {} steps of dt = {}", steps, TIME_STEP);

    let start = Instant::now();
    system.advance_many(steps, TIME_STEP);
    let elapsed = start.elapsed();

    for (i, body) in system.bodies().iter().enumerate() {
        log::trace!("{}: position {:?}", body_name(BodyID(i)), body.position);
    }

    let last = system.energy();
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 {
        log::info!(
            "{} steps in {:.3?} ({:.0} steps/s)",
            steps,
            elapsed,
            steps as f64 / secs
        );
    } else {
        log::info!("{} steps in {:.3?}", steps, elapsed);
    }

    let report = EnergyReport {
        steps,
        initial,
        last,
    };
    log::debug!("energy drift: {:e}", report.drift());
    report
}
