//! Agent module - single-use agent definitions and the four-stage pipeline.
//!
//! Each stage follows the same one-shot pattern:
//! 1. Interpolate the stage inputs into a fixed persona instruction
//! 2. Run the agent against one synthesized user message in a fresh session
//! 3. Hand the collected final-response text to the next stage

mod definition;
mod pipeline;
pub mod prompt;

pub use definition::{call_agent, Agent};
pub use pipeline::{Pipeline, PipelineReport};
