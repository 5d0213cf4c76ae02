//! Uniform-random sensor generator for one observation session.

use super::{RollingHistory, SensorReading};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const TOOL_WEAR_MAX: f64 = 250.0;

const AIR_TEMP: (f64, f64) = (298.0, 302.0);
const PROCESS_TEMP: (f64, f64) = (308.0, 312.0);
const ROTATIONAL_SPEED: (f64, f64) = (1400.0, 1600.0);
const TORQUE: (f64, f64) = (35.0, 50.0);
const WEAR_PER_READING: f64 = 2.0;
const WEAR_JITTER: f64 = 10.0;

pub struct TelemetrySimulator {
    rng: StdRng,
    /// Ticks since the session started
    ticks: u64,
    last_wear: f64,
}

impl TelemetrySimulator {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            ticks: 0,
            last_wear: 0.0,
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(Some(seed))
    }

    /// Start a new session: tool wear restarts from zero.
    pub fn reset(&mut self) {
        self.ticks = 0;
        self.last_wear = 0.0;
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Generate the next reading for a history currently holding
    /// `history_len` readings. Tool wear is `min(250, 2 * history_len + jitter)`,
    /// held at its previous value if the jitter would make it drop.
    pub fn next_reading(&mut self, history_len: usize) -> SensorReading {
        let air_temp = self.rng.gen_range(AIR_TEMP.0..AIR_TEMP.1);
        let process_temp = self.rng.gen_range(PROCESS_TEMP.0..PROCESS_TEMP.1);
        let rotational_speed = self.rng.gen_range(ROTATIONAL_SPEED.0..ROTATIONAL_SPEED.1);
        let torque = self.rng.gen_range(TORQUE.0..TORQUE.1);
        let jitter = self.rng.gen_range(0.0..WEAR_JITTER);

        let candidate = (WEAR_PER_READING * history_len as f64 + jitter).min(TOOL_WEAR_MAX);
        let tool_wear = candidate.max(self.last_wear);
        self.last_wear = tool_wear;
        self.ticks += 1;

        SensorReading::new(
            Utc::now(),
            air_temp,
            process_temp,
            rotational_speed,
            torque,
            tool_wear,
        )
    }

    /// Generate a reading from the current history length and append it.
    /// An empty history starts a new session.
    pub fn tick(&mut self, history: &mut RollingHistory) -> SensorReading {
        if history.is_empty() {
            self.reset();
        }
        let reading = self.next_reading(history.len());
        history.push(reading.clone());
        reading
    }
}
