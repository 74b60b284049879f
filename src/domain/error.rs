// Layout error taxonomy
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LayoutError>;

#[derive(Error, Debug)]
pub enum LayoutError {
    /// A reorder referenced a position that does not exist in the section order
    #[error("index {index} is out of range for {len} sections")]
    IndexOutOfRange { index: usize, len: usize },

    /// The section registry listed the same id twice
    #[error("section `{0}` is defined more than once")]
    DuplicateSection(String),

    /// A persisted value could not be parsed
    #[error("persisted value under `{key}` is malformed: {source}")]
    CorruptState {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The backing key-value store failed
    #[error("storage error: {0:#}")]
    Storage(#[from] anyhow::Error),

    /// The layout service was disposed and no longer accepts mutations
    #[error("layout service has been disposed")]
    Disposed,
}
