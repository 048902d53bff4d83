//! Resumable action state machines for real-time simulations.
//!
//! Multi-tick behaviors are written as ordinary-looking step functions that
//! are re-entered once per simulation tick. Each behavior resumes from an
//! explicitly persisted stage and reports an [`Outcome`]:
//!
//! - **No suspension**: "waiting" is returning [`Outcome::InProgress`] and
//!   being called again next tick
//! - **Opaque stages**: the driver persists a [`RawStage`] and never interprets it
//! - **Typed stages**: behaviors see their own [`Stage`] enum, decoded per call
//! - **Single writer**: exactly one action runs per tick, no locking
//!
//! # Architecture
//!
//! - [`Action`]: Core trait for a single resumable behavior
//! - [`ActionSet`]: A named family of actions dispatched by name
//! - [`driver`]: Decodes the stage, calls the action once, writes the stage back
//! - [`Runner`]: Tracks the active action and resets stages between runs

pub mod action;
pub mod driver;
pub mod error;
pub mod outcome;
pub mod runner;
pub mod stage;

// Re-export core types for ergonomic API
pub use action::{Action, ActionSet};
pub use error::InvalidStage;
pub use outcome::Outcome;
pub use runner::{Interrupted, Runner};
pub use stage::{RawStage, Stage};
