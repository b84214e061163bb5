//! # Elo Comunitário
//!
//! A console pipeline of four single-use Gemini agents that helps a community
//! member work through a local problem.
//!
//! ## Architecture
//!
//! The stages run strictly in sequence, each consuming the full text output of
//! the ones before it:
//! 1. Analyze the reported problem (search-augmented)
//! 2. Map locally available resources (search-augmented)
//! 3. Generate community-actionable solutions
//! 4. Evaluate feasibility and impact per solution
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use elo_comunitario::{agent::Pipeline, config::Config, llm::GeminiClient};
//!
//! let config = Config::from_env()?;
//! let client = Arc::new(GeminiClient::new(config.api_key.clone()));
//! let pipeline = Pipeline::new(client, config.model.clone());
//! let report = pipeline.run("falta de coleta de lixo", "Bairro Central").await?;
//! ```

pub mod agent;
pub mod cli;
pub mod config;
pub mod llm;
pub mod render;

pub use config::Config;
