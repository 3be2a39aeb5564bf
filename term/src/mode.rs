//! Configuration values for comparing and building nodes.

/// How literals are compared for equality (and ordering).
///
/// This is a plain value, bound into collections and matchers at construction,
/// or passed explicitly to [`Node::eq_with`](crate::Node::eq_with) and
/// [`Node::cmp_with`](crate::Node::cmp_with).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum LiteralEqualityMode {
    /// Literals are equal iff their lexical forms, datatypes and language tags are equal.
    #[default]
    Strict,
    /// Literals of recognized XSD datatypes are equal iff they denote the same value,
    /// e.g. `"1"^^xsd:int` and `"01"^^xsd:int`.
    ///
    /// Malformed literals, and literals of other datatypes, are still compared strictly.
    Loose,
}

/// How strictly the constituents of nodes are checked when built by a
/// [`NodeFactory`](crate::NodeFactory).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ValidationMode {
    /// No check at all.
    None,
    /// IRIs must be absolute, language tags must comply with BCP47.
    #[default]
    WellFormed,
    /// IRIs must be absolute, language tags must comply with Turtle's `LANGTAG` production.
    Turtle,
}
