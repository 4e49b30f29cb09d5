use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProjError {
    #[error("Unknown CRS: {0}")]
    UnknownCrs(String),

    #[error("No transform registered from {src} to {dst}")]
    NoTransform { src: String, dst: String },
}
