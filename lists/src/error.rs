use thiserror::Error;

pub type Result<T> = std::result::Result<T, ListError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("invalid position {position} for a list of length {len}")]
    InvalidPosition { position: i64, len: usize },
    #[error("no matching element")]
    NotFound,
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ListError {
    pub(crate) fn position(position: usize, len: usize) -> Self {
        ListError::InvalidPosition {
            position: i64::try_from(position).unwrap_or(i64::MAX),
            len,
        }
    }
}

// 解析整数失败时统一转换为 InvalidInput
impl From<std::num::ParseIntError> for ListError {
    fn from(value: std::num::ParseIntError) -> Self {
        ListError::InvalidInput(value.to_string())
    }
}

/// An element the list refused to take, handed back to the caller together
/// with the reason. The caller owns `elem` again and decides how to dispose of it.
#[derive(Debug, Error)]
#[error("{reason}")]
pub struct Rejected<T> {
    pub elem: T,
    pub reason: ListError,
}

impl<T> Rejected<T> {
    pub fn new(elem: T, reason: ListError) -> Self {
        Rejected { elem, reason }
    }

    pub fn into_inner(self) -> T {
        self.elem
    }
}

/// Parses a user supplied position. Negative values are valid integers but
/// never valid positions, so they come back as `InvalidPosition`.
pub fn parse_position(input: &str, len: usize) -> Result<usize> {
    let position: i64 = input.trim().parse()?;
    usize::try_from(position).map_err(|_| ListError::InvalidPosition { position, len })
}
