use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocGenError {
    #[error("PDF rendering failed: {0}")]
    Render(String),
}

impl From<lopdf::Error> for DocGenError {
    fn from(e: lopdf::Error) -> Self {
        DocGenError::Render(e.to_string())
    }
}
