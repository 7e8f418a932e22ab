use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// An id-addressed operation found no document. Display is the bare message
    /// so it can be returned to callers as-is.
    #[error("{0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn db(e: impl std::fmt::Display) -> Self { Self::Db(e.to_string()) }

    pub fn is_not_found(&self) -> bool { matches!(self, Self::NotFound(_)) }
}
