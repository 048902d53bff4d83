//! Headless weapon simulation.
//!
//! Drives a [`weapon_core::WeaponController`] over a fixed number of ticks
//! against a [`ScriptedOwner`] whose clips finish after configured lengths.
//! The trigger and holster timings come from [`SimConfig`].

pub mod config;
pub mod owner;
pub mod scenario;

pub use config::SimConfig;
pub use owner::ScriptedOwner;
pub use scenario::{SimSummary, resume, run};
