pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Graph(#[from] crate::graph::Error),

    #[error("Invalid layout options: {message}")]
    InvalidOptions { message: String },

    #[error("Layered graph invariant violated: {message}")]
    Invariant { message: String },
}
