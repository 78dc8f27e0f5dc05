use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Unknown view '{0}'. Expected one of: {1}")]
    UnknownView(String, String),
}
