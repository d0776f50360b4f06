#![deny(warnings)]

//! Engine runtime for Startup Tycoon.
//!
//! Applies player commands and passive-income ticks to a single owned
//! [`sim_core::GameState`], running the dependent level-up and achievement
//! passes strictly after each primary mutation.

mod engine;
mod session;
mod timer;

pub use engine::{
    CommandError, Engine, EngineEvent, SessionSummary, ACHIEVEMENT_DISPLAY_UNITS,
    ACHIEVEMENT_REVENUE_THRESHOLD, PRODUCT_COST, PRODUCT_XP, RESEARCH_XP,
};
pub use session::Session;
pub use timer::{TickTimer, PASSIVE_TICK_UNITS};
