// SPDX-License-Identifier: MPL-2.0
//! Test helpers shared by the unit test modules.
//!
//! Float assertions come from the `approx` crate; `assert_eq!` is only used
//! for values that are rounded to whole millimeters.

pub use approx::assert_abs_diff_eq;

use crate::optics::{OpticsModel, SensorId};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Serializes tests that touch process environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Tolerance for angles in degrees when comparing against published values.
pub const ANGLE_EPSILON_DEG: f64 = 0.05;

/// A default model switched to `sensor` with the physical focal `focal_mm`.
pub fn model_at(sensor: SensorId, focal_mm: f64) -> OpticsModel {
    let mut model = OpticsModel::default();
    model.set_sensor(sensor.sensor());
    model.set_focal_length(focal_mm);
    model
}

/// Locks the environment for the duration of a test. A panic in another
/// holder does not poison later tests.
pub fn env_lock() -> MutexGuard<'static, ()> {
    ENV_MUTEX.lock().unwrap_or_else(PoisonError::into_inner)
}
