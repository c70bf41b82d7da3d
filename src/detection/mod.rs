pub mod analyzer;
pub mod types;

pub use analyzer::{inspect, AnalysisError, AnalyzerConfig, ProjectAnalyzer};
pub use types::{Classification, Inspection};
