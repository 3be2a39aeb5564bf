//! I define the [`TripleCollection`] trait,
//! the interface shared by indexed triple collections and graphs.
//!
//! A collection stores two kinds of triples:
//! * *asserted* triples, which have been explicitly [added](TripleCollection::add);
//! * *quoted* triples, which occur (possibly deeply nested) as a quoted-triple node
//!   inside a stored triple.
//!
//! A triple can be both asserted and quoted.
//! Quoted triples live as long as some stored triple quotes them.
use trigon_term::{LiteralEqualityMode, Node, Triple};

/// An iterator over the triples of a [`TripleCollection`].
pub type TripleIter<'a> = Box<dyn Iterator<Item = &'a Triple> + 'a>;

/// A collection of asserted and quoted triples, indexed for retrieval by position.
///
/// Absence is never an error: lookups for unknown nodes or triples
/// yield empty iterators, `false` or `0`.
pub trait TripleCollection {
    /// The error raised when a triple can not be added.
    type Error: std::error::Error + 'static;

    /// Assert `triple` in this collection.
    ///
    /// Return `true` iff the triple was not already asserted.
    fn add(&mut self, triple: Triple) -> Result<bool, Self::Error>;

    /// Retract `triple` from this collection.
    ///
    /// Return `true` iff the triple was asserted.
    /// Triples that are only quoted can not be deleted (`false` is returned).
    fn delete(&mut self, triple: &Triple) -> bool;

    /// Whether `triple` is asserted in this collection.
    fn contains(&self, triple: &Triple) -> bool;

    /// Whether `triple` is quoted in this collection.
    fn contains_quoted(&self, triple: &Triple) -> bool;

    /// The number of asserted triples.
    fn count(&self) -> usize;

    /// The number of quoted triples.
    fn quoted_count(&self) -> usize;

    /// All asserted triples.
    fn asserted(&self) -> TripleIter<'_>;

    /// All quoted triples.
    fn quoted(&self) -> TripleIter<'_>;

    /// The asserted triples matching the given pattern,
    /// where `None` is a wildcard.
    fn matching<'s>(
        &'s self,
        s: Option<&Node>,
        p: Option<&Node>,
        o: Option<&Node>,
    ) -> TripleIter<'s>;

    /// The quoted triples matching the given pattern,
    /// where `None` is a wildcard.
    fn quoted_matching<'s>(
        &'s self,
        s: Option<&Node>,
        p: Option<&Node>,
        o: Option<&Node>,
    ) -> TripleIter<'s>;

    /// The distinct subjects of asserted triples.
    fn subject_nodes(&self) -> Vec<&Node>;

    /// The distinct predicates of asserted triples.
    fn predicate_nodes(&self) -> Vec<&Node>;

    /// The distinct objects of asserted triples.
    fn object_nodes(&self) -> Vec<&Node>;

    /// Remove all triples, asserted and quoted.
    fn clear(&mut self);

    /// The equality mode used to compare literals in this collection.
    fn equality_mode(&self) -> LiteralEqualityMode;

    /// Whether this collection has no asserted triple.
    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Assert all `triples` in this collection.
    ///
    /// Return the number of triples that were not already asserted.
    fn add_all<I>(&mut self, triples: I) -> Result<usize, Self::Error>
    where
        I: IntoIterator<Item = Triple>,
        Self: Sized,
    {
        let mut added = 0;
        for t in triples {
            if self.add(t)? {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Retract all `triples` from this collection.
    ///
    /// Return the number of triples that were asserted.
    fn delete_all<'a, I>(&mut self, triples: I) -> usize
    where
        I: IntoIterator<Item = &'a Triple>,
        Self: Sized,
    {
        triples.into_iter().filter(|t| self.delete(t)).count()
    }

    /// Asserted triples with subject `s`.
    fn with_subject<'s>(&'s self, s: &Node) -> TripleIter<'s> {
        self.matching(Some(s), None, None)
    }

    /// Asserted triples with predicate `p`.
    fn with_predicate<'s>(&'s self, p: &Node) -> TripleIter<'s> {
        self.matching(None, Some(p), None)
    }

    /// Asserted triples with object `o`.
    fn with_object<'s>(&'s self, o: &Node) -> TripleIter<'s> {
        self.matching(None, None, Some(o))
    }

    /// Asserted triples with subject `s` and predicate `p`.
    fn with_subject_predicate<'s>(&'s self, s: &Node, p: &Node) -> TripleIter<'s> {
        self.matching(Some(s), Some(p), None)
    }

    /// Asserted triples with subject `s` and object `o`.
    fn with_subject_object<'s>(&'s self, s: &Node, o: &Node) -> TripleIter<'s> {
        self.matching(Some(s), None, Some(o))
    }

    /// Asserted triples with predicate `p` and object `o`.
    fn with_predicate_object<'s>(&'s self, p: &Node, o: &Node) -> TripleIter<'s> {
        self.matching(None, Some(p), Some(o))
    }

    /// The asserted triple (`s`, `p`, `o`), if any.
    fn with_subject_predicate_object<'s>(&'s self, s: &Node, p: &Node, o: &Node) -> TripleIter<'s> {
        self.matching(Some(s), Some(p), Some(o))
    }

    /// Quoted triples with subject `s`.
    fn quoted_with_subject<'s>(&'s self, s: &Node) -> TripleIter<'s> {
        self.quoted_matching(Some(s), None, None)
    }

    /// Quoted triples with predicate `p`.
    fn quoted_with_predicate<'s>(&'s self, p: &Node) -> TripleIter<'s> {
        self.quoted_matching(None, Some(p), None)
    }

    /// Quoted triples with object `o`.
    fn quoted_with_object<'s>(&'s self, o: &Node) -> TripleIter<'s> {
        self.quoted_matching(None, None, Some(o))
    }

    /// Quoted triples with subject `s` and predicate `p`.
    fn quoted_with_subject_predicate<'s>(&'s self, s: &Node, p: &Node) -> TripleIter<'s> {
        self.quoted_matching(Some(s), Some(p), None)
    }

    /// Quoted triples with subject `s` and object `o`.
    fn quoted_with_subject_object<'s>(&'s self, s: &Node, o: &Node) -> TripleIter<'s> {
        self.quoted_matching(Some(s), None, Some(o))
    }

    /// Quoted triples with predicate `p` and object `o`.
    fn quoted_with_predicate_object<'s>(&'s self, p: &Node, o: &Node) -> TripleIter<'s> {
        self.quoted_matching(None, Some(p), Some(o))
    }

    /// The quoted triple (`s`, `p`, `o`), if any.
    fn quoted_with_subject_predicate_object<'s>(
        &'s self,
        s: &Node,
        p: &Node,
        o: &Node,
    ) -> TripleIter<'s> {
        self.quoted_matching(Some(s), Some(p), Some(o))
    }
}
