use thiserror::Error;

/// Type alias for `Result` with default error `TermError`.
///
/// Can be used like `std::result::Result` as well.
pub type Result<T, E = TermError> = std::result::Result<T, E>;

/// This error is raised when the creation of a node fails.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TermError {
    /// IRIs must be absolute and apply to [RFC 3987](https://tools.ietf.org/html/rfc3987).
    #[error("The given IRI '{0}' is not valid according to RFC3987")]
    InvalidIri(String),
    /// The language tags of literals must apply to [BCP47](https://tools.ietf.org/html/bcp47)
    /// (or to Turtle's `LANGTAG` production, depending on the validation mode).
    #[error("The given language tag '{tag}' is not valid: {err}")]
    InvalidLanguageTag {
        /// The provided, faulty language tag.
        tag: String,
        /// What is wrong with `tag`.
        err: String,
    },
    /// Blank node identifiers must apply to Turtle's [production rules](https://www.w3.org/TR/turtle/#grammar-production-BLANK_NODE_LABEL).
    #[error("The identifier '{0}' is not valid for a blank node according to Turtle's BLANK_NODE_LABEL")]
    InvalidBnodeId(String),
    /// Names of variables must apply to SPARQL's [production rules](https://www.w3.org/TR/sparql11-query/#rVARNAME).
    #[error("The name '{0}' is not valid for a variable according to SPARQL's VARNAME")]
    InvalidVarName(String),
}
