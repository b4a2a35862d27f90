//! # Savedate Engine Library
//!
//! Core countdown logic for the savedate terminal invitation. This library
//! computes the time remaining until a fixed event instant and republishes it
//! on a fixed cadence to any number of display subscribers.
//!
//! ## Modules
//!
//! - [`target`] - The fixed event instant the countdown runs towards
//! - [`duration`] - Days/hours/minutes/seconds decomposition of remaining time
//! - [`clock`] - Wall-clock abstraction used by the engine
//! - [`countdown`] - The countdown engine and its elapsed-target policy
//! - [`ticker`] - Background cadence that drives the engine and publishes ticks
//! - [`error`] - Error types for target configuration

pub mod clock;
pub mod countdown;
pub mod duration;
pub mod error;
pub mod target;
pub mod ticker;

pub use clock::{Clock, SystemClock};
pub use countdown::{CountdownEngine, ElapsedPolicy};
pub use duration::RemainingDuration;
pub use error::CountdownError;
pub use target::TargetInstant;
pub use ticker::{CountdownTicker, DEFAULT_CADENCE};
