//! Generation pipeline: plan the random parameters, synthesize intensity, walk, color.
pub mod config;
pub mod events;
pub mod plan;
pub mod runner;

pub use config::{GeneratorConfig, StartPolicy};
pub use plan::GenerationPlan;
pub use runner::{generate, generate_with_events, Generation, Generator};
