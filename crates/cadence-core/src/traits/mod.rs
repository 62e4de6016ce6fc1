mod analyzer;
mod generator;

pub use analyzer::IPatternAnalyzer;
pub use generator::ISuggestionGenerator;
