//! Simulated upload + analysis pipeline for the document screen.

pub mod analyzer;
pub mod pipeline;

pub use analyzer::{AnalysisError, DocumentAnalyzer, SimulatedAnalyzer};
pub use pipeline::{run_pipeline, PipelineOutcome};
