#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid input: {0}")]
    Validation(String),

    #[error("update rejected: {0}")]
    Update(String),
}

impl ClientError {
    pub fn kind(&self) -> &'static str {
        match self {
            ClientError::Network(_) => "network",
            ClientError::NotFound(_) => "not_found",
            ClientError::Validation(_) => "validation",
            ClientError::Update(_) => "update",
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
