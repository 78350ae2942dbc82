//! Error types for the Hardstyle publishing bots

use thiserror::Error;

/// Result type alias for bot operations
pub type BotResult<T> = Result<T, BotError>;

/// Errors that can occur during a generate-and-publish run
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Mistral authentication failed: {0}")]
    GenerationAuth(String),

    #[error("Mistral generation failed: {0}")]
    Generation(String),

    #[error("Unexpected Mistral response: {0}")]
    GenerationResponse(String),

    #[error("Hashnode publish failed: {0}")]
    Publish(String),

    #[error("Hashnode GraphQL error: {0}")]
    PublishGraphql(String),
}
