use thiserror::Error;

/// This error is raised when a triple can not be added to a collection.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CollectionError {
    /// The term index of the collection can not accept any more distinct node.
    #[error("The term index is full (it can hold at most {0} distinct nodes)")]
    TermIndexFull(usize),
}
