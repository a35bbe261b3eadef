use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Please enter some code to analyze.")]
    EmptyInput,

    #[error("Failed to generate test cases: {0}")]
    Status(String),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}
