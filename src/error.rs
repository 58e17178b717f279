use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid structured filter: {0}")]
    Parse(String),

    #[error("Failed to encode structured filter: {0}")]
    Encode(#[from] serde_json::Error),
}

impl From<serde_yaml::Error> for CliError {
    fn from(err: serde_yaml::Error) -> Self {
        CliError::Parse(err.to_string())
    }
}
