//! External advisor collaborators.

pub mod advisor;
pub mod ollama;
pub mod prompts;

pub use advisor::{ChartAdvisor, FixedAdvisor, OllamaAdvisor};
pub use ollama::OllamaClient;
