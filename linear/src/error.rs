use miette::Diagnostic;
use thiserror::Error;

/// Programmer errors reported by the containers.
///
/// Every operation validates its input before mutating, so a container that
/// returned an error is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum CollectionError {
    #[error("the collection is empty")]
    #[diagnostic(
        code(linear::empty_collection),
        help("check `is_empty` before peeking or removing")
    )]
    EmptyCollection,
    #[error("index {index} is out of range for length {len}")]
    #[diagnostic(code(linear::index_out_of_range))]
    IndexOutOfRange { index: usize, len: usize },
    #[error("capacity {capacity} cannot be allocated")]
    #[diagnostic(code(linear::invalid_argument))]
    InvalidArgument { capacity: usize },
    #[error("node handle does not point to a live node of this list")]
    #[diagnostic(code(linear::stale_node))]
    StaleNode,
}

impl CollectionError {
    pub(crate) fn check_index(index: usize, len: usize) -> Result<(), Self> {
        if index >= len {
            return Err(CollectionError::IndexOutOfRange { index, len });
        }
        Ok(())
    }
}
