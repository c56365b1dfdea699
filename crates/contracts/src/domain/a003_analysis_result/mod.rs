pub mod aggregate;
pub mod generator;

pub use aggregate::{AnalysisDetails, AnalysisResult, RiskLevel};
pub use generator::{document_type_for, synthesize};
