//! Pipelines.
//!
//! The module provides a light [pipeline::Pipeline] trait,
//! implemented by the corpus materialization pipeline ([CorpusPipeline]).
mod corpus;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use corpus::{CorpusBuilder, CorpusPipeline, CorpusStats, OnMalformed};
pub use pipeline::Pipeline;
