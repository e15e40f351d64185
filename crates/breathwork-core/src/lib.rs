//! # Breathwork Core Library
//!
//! This library provides the breathing cycle engine behind the Breathwork
//! CLI. Hosts own rendering and scheduling; the core only knows phases,
//! countdowns and cycle counts.
//!
//! ## Architecture
//!
//! - **Cycle Engine**: A tick-driven state machine that requires the caller
//!   to invoke `tick()` once per elapsed second
//! - **Tick Driver**: A tokio interval that issues those ticks with
//!   cooperative cancellation
//! - **Variants**: The breathing game (scored) and the guided exercise
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`BreathingSession`]: Core breathing state machine
//! - [`TickDriver`]: Periodic tick scheduler
//! - [`BreathingGame`] / [`GuidedExercise`]: Consumer variants
//! - [`Config`]: Application configuration management

pub mod cycle;
pub mod driver;
pub mod error;
pub mod events;
pub mod storage;
pub mod variants;

pub use cycle::{BreathingSession, Phase};
pub use driver::{TickDriver, Tickable};
pub use error::{ConfigError, CoreError};
pub use events::Event;
pub use storage::Config;
pub use variants::{BreathingGame, GuidedExercise};
