use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoryboardError {
    #[error("API key is missing. Please check your environment configuration.")]
    MissingApiKey,

    #[error("Please enter text to generate a storyboard.")]
    EmptyInput,

    #[error("No content generated. Please try again.")]
    EmptyReply,

    #[error("API error: {0}")]
    ApiError(String),

    #[error("HTTP request error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StoryboardError>;
