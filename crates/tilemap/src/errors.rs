#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GridError {
    #[error("Unable to read grid file: {}", _0)]
    Io(#[from] std::io::Error),

    #[error("Grid is not a JSON array of rows of cells: {}", _0)]
    Parse(#[from] serde_json::Error),
}

pub type Result<T, E = GridError> = std::result::Result<T, E>;
