//! I define the [`Iri`] wrapper type,
//! which guarantees that the underlying text is an absolute
//! [IRI](https://www.w3.org/TR/rdf11-concepts/#section-IRIs).
use crate::{Result, TermError};

wrap! {
    /// An absolute IRI, as used for IRI nodes and literal datatypes.
    ///
    /// Two IRIs are equal iff their text is identical
    /// (no normalization is performed).
    Iri:
    /// Build a new [`Iri`] from `iri`,
    /// returning an error if it is not a valid absolute IRI.
    pub fn new<T: Into<std::sync::Arc<str>>>(iri: T) -> Result<Self> {
        let iri = iri.into();
        if is_absolute_iri(&iri) {
            Ok(Iri(iri))
        } else {
            Err(TermError::InvalidIri(iri.to_string()))
        }
    }
}

/// Check whether `txt` is a valid absolute IRI.
pub fn is_absolute_iri(txt: &str) -> bool {
    oxiri::Iri::parse(txt).is_ok()
}
