// Core compatibility pipeline exports
pub mod error;
pub mod evaluator;
pub mod parser;
pub mod profile;
pub mod prompt;

pub use error::{CompatibilityError, ProviderError, ScoreField};
pub use evaluator::{evaluate_compatibility, CompatibilityEvaluator, RetryPolicy};
pub use parser::parse_compatibility;
pub use profile::render_profile;
pub use prompt::build_prompt;
