#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("graph contains an edge with a missing endpoint: {edge}")]
    MissingEndpoint { edge: String },
}

pub type Result<T> = std::result::Result<T, Error>;
