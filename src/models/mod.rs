// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{CompatibilityRequest, CompatibilityResult, Profile, ProfileAnswer, ProfileSheet};
pub use requests::{EvaluateRequest, ProfileInput};
pub use responses::{ErrorResponse, EvaluateResponse, HealthResponse, PromptResponse};
