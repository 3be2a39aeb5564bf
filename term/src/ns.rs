//! # Standard namespaces
//!
//! This module provides the IRIs of the [`xsd`] and [`rdf`] vocabularies
//! that nodes and literals need to know about,
//! as `&'static str` usable with [`Iri::new_unchecked`](crate::Iri::new_unchecked).

/// Helper for creating a "namespace module"
/// defining a set of IRIs within a given IRI space.
///
/// # Safety
/// This macro is conceptually unsafe,
/// as it is never checked that the prefix IRI is a valid IRI.
macro_rules! namespace {
    ($iri_prefix:literal, $($suffix:ident),*; $($r_id:ident, $r_sf:literal),*) => {
        /// Prefix used in this namespace.
        pub static PREFIX: &str = $iri_prefix;
        $(
            #[allow(non_upper_case_globals)]
            #[doc = concat!("The IRI `", $iri_prefix, stringify!($suffix), "`")]
            pub static $suffix: &str = concat!($iri_prefix, stringify!($suffix));
        )*
        $(
            #[allow(non_upper_case_globals)]
            #[doc = concat!("The IRI `", $iri_prefix, $r_sf, "`")]
            pub static $r_id: &str = concat!($iri_prefix, $r_sf);
        )*
    };
    ($iri_prefix:literal, $($suffix:ident),*) => {
        namespace!($iri_prefix, $($suffix),*;);
    };
}

/// The standard `rdf:` namespace.
pub mod rdf {
    namespace!(
        "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
        // classes
        Statement,
        // datatypes
        langString,
        // properties
        subject,
        predicate,
        object,
        value;
        // reserved keyword
        type_, "type"
    );
}

/// The standard `xsd:` namespace.
pub mod xsd {
    namespace!(
        "http://www.w3.org/2001/XMLSchema#",
        anyURI,
        boolean,
        byte,
        date,
        dateTime,
        dateTimeStamp,
        decimal,
        double,
        float,
        int,
        integer,
        long,
        negativeInteger,
        nonNegativeInteger,
        nonPositiveInteger,
        positiveInteger,
        short,
        string,
        unsignedByte,
        unsignedInt,
        unsignedLong,
        unsignedShort
    );
}
