//! Environment abstraction for deterministic testing.
//!
//! The store never reads the wall clock, sleeps, or draws random numbers on
//! its own. It asks an [`Environment`], so tests can run against a virtual
//! clock and a seeded (or fixed) random source without waiting.

use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Time, latency and randomness as seen by the store.
///
/// Implementations MUST guarantee that `now()` never goes backwards and that
/// `random_f64()` stays in `[0, 1)`.
pub trait Environment: Clone + Send + Sync + 'static {
    fn now(&self) -> DateTime<Utc>;

    /// Simulated network latency. Only `login`, `register`, `refresh` and
    /// `upgrade_premium` await this.
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send;

    fn random_f64(&self) -> f64;
}

/// Wall clock, tokio timers and the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl Environment for SystemEnv {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }

    fn random_f64(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

#[derive(Debug)]
enum RollSource {
    Seeded(StdRng),
    Fixed(f64),
}

#[derive(Debug)]
struct SimState {
    now: DateTime<Utc>,
    rolls: RollSource,
}

/// Virtual clock plus a deterministic random source.
///
/// `sleep` advances the virtual clock by the requested duration and resolves
/// immediately. Clones share the same clock and RNG.
#[derive(Debug, Clone)]
pub struct SimEnv {
    inner: Arc<Mutex<SimState>>,
}

/// 2024-01-01T12:00:00Z
const SIM_EPOCH_SECS: i64 = 1_704_110_400;

impl SimEnv {
    pub fn seeded(seed: u64) -> Self {
        Self::with_rolls(RollSource::Seeded(StdRng::seed_from_u64(seed)))
    }

    /// Every draw returns `roll`, clamped into `[0, 1)`.
    pub fn fixed_roll(roll: f64) -> Self {
        Self::with_rolls(RollSource::Fixed(roll.clamp(0.0, 1.0 - f64::EPSILON)))
    }

    fn with_rolls(rolls: RollSource) -> Self {
        let now = DateTime::from_timestamp(SIM_EPOCH_SECS, 0).unwrap_or_default();
        Self {
            inner: Arc::new(Mutex::new(SimState { now, rolls })),
        }
    }

    fn state(&self) -> std::sync::MutexGuard<'_, SimState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn advance(&self, duration: Duration) {
        let step = chrono::Duration::from_std(duration).unwrap_or(chrono::Duration::zero());
        let mut state = self.state();
        state.now += step;
    }

    /// Switches to a fixed roll for all subsequent draws.
    pub fn set_roll(&self, roll: f64) {
        self.state().rolls = RollSource::Fixed(roll.clamp(0.0, 1.0 - f64::EPSILON));
    }
}

impl Environment for SimEnv {
    fn now(&self) -> DateTime<Utc> {
        self.state().now
    }

    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        self.advance(duration);
        std::future::ready(())
    }

    fn random_f64(&self) -> f64 {
        match &mut self.state().rolls {
            RollSource::Seeded(rng) => rng.gen::<f64>(),
            RollSource::Fixed(roll) => *roll,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sim_sleep_advances_clock_without_waiting() {
        let env = SimEnv::fixed_roll(0.5);
        let before = env.now();
        env.sleep(Duration::from_millis(1500)).await;
        assert_eq!(env.now() - before, chrono::Duration::milliseconds(1500));
    }

    #[test]
    fn seeded_rolls_are_reproducible() {
        let a = SimEnv::seeded(42);
        let b = SimEnv::seeded(42);
        let xs: Vec<f64> = (0..5).map(|_| a.random_f64()).collect();
        let ys: Vec<f64> = (0..5).map(|_| b.random_f64()).collect();
        assert_eq!(xs, ys);
        assert!(xs.iter().all(|x| (0.0..1.0).contains(x)));
    }

    #[test]
    fn fixed_roll_is_clamped() {
        let env = SimEnv::fixed_roll(1.0);
        assert!(env.random_f64() < 1.0);
        env.set_roll(-3.0);
        assert_eq!(env.random_f64(), 0.0);
    }

    #[test]
    fn clones_share_the_clock() {
        let env = SimEnv::seeded(1);
        let other = env.clone();
        env.advance(Duration::from_secs(60));
        assert_eq!(env.now(), other.now());
    }
}
