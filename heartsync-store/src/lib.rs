//! Client-side state store for the HeartSync dating app.
//!
//! One [`Store`] owns the session: authentication, the signed-in profile, the
//! swipe deck and the master list it is filtered from, matches, chat threads
//! and discovery filters. The presentation layer reads through selectors and
//! mutates only through store operations.
//!
//! Time, simulated latency and the match draw come from an injected
//! [`Environment`], so tests run on [`SimEnv`] without waiting.

pub mod config;
pub mod env;
pub mod events;
pub mod fixtures;
pub mod matching;
pub mod models;
pub mod premium;
pub mod store;

pub use config::StoreConfig;
pub use env::{Environment, SimEnv, SystemEnv};
pub use events::StoreEvent;
pub use fixtures::Seed;
pub use matching::gesture::{CardRelease, SwipeDirection};
pub use models::{FilterSettings, FilterUpdate, Match, Message, User, UserUpdate};
pub use store::{Store, StoreState, SwipeOutcome};
