//! I define [`GenericIndexedTripleCollection`],
//! the reference implementation of [`TripleCollection`].
use std::collections::{BTreeSet, HashMap};
use std::iter::{empty, once};

use trigon_term::{LiteralEqualityMode, Node, Triple};

use crate::collection::{TripleCollection, TripleIter};
use crate::index::{Index, TermIndex};
use crate::CollectionError;

/// The key of a stored triple: the indices of its subject, predicate and object.
type Key<I> = [I; 3];

/// The arena entry of a stored (asserted and/or quoted) triple.
#[derive(Clone, Debug)]
struct TripleEntry<I> {
    /// The triple as it was first added.
    triple: Triple,
    asserted: bool,
    /// How many stored triples directly quote this one (counted once per occurrence).
    quote_count: usize,
    /// The keys of the triples directly quoted by this one.
    children: Vec<Key<I>>,
}

/// Three sorted permutations of a set of triple keys,
/// so that every access pattern is a prefix range of one of them.
#[derive(Clone, Debug)]
struct TripleIndex<I: Index> {
    spo: BTreeSet<Key<I>>,
    pos: BTreeSet<Key<I>>,
    osp: BTreeSet<Key<I>>,
}

impl<I: Index> TripleIndex<I> {
    fn new() -> Self {
        TripleIndex {
            spo: BTreeSet::new(),
            pos: BTreeSet::new(),
            osp: BTreeSet::new(),
        }
    }

    fn len(&self) -> usize {
        self.spo.len()
    }

    fn insert(&mut self, [is, ip, io]: Key<I>) -> bool {
        if self.spo.insert([is, ip, io]) {
            let i = self.pos.insert([ip, io, is]);
            debug_assert!(i);
            let i = self.osp.insert([io, is, ip]);
            debug_assert!(i);
            true
        } else {
            false
        }
    }

    fn remove(&mut self, [is, ip, io]: &Key<I>) -> bool {
        if self.spo.remove(&[*is, *ip, *io]) {
            let i = self.pos.remove(&[*ip, *io, *is]);
            debug_assert!(i);
            let i = self.osp.remove(&[*io, *is, *ip]);
            debug_assert!(i);
            true
        } else {
            false
        }
    }

    fn clear(&mut self) {
        self.spo.clear();
        self.pos.clear();
        self.osp.clear();
    }

    /// The keys matching the given pattern, in no particular order.
    fn matching(
        &self,
        si: Option<I>,
        pi: Option<I>,
        oi: Option<I>,
    ) -> Box<dyn Iterator<Item = Key<I>> + '_> {
        let (z, m) = (I::ZERO, I::MAX);
        match (si, pi, oi) {
            (Some(si), Some(pi), Some(oi)) => {
                let key = [si, pi, oi];
                if self.spo.contains(&key) {
                    Box::new(once(key))
                } else {
                    Box::new(empty())
                }
            }
            (Some(si), Some(pi), None) => Box::new(self.spo.range([si, pi, z]..=[si, pi, m]).copied()),
            (Some(si), None, None) => Box::new(self.spo.range([si, z, z]..=[si, m, m]).copied()),
            (None, Some(pi), Some(oi)) => Box::new(
                self.pos
                    .range([pi, oi, z]..=[pi, oi, m])
                    .map(|[p, o, s]| [*s, *p, *o]),
            ),
            (None, Some(pi), None) => Box::new(
                self.pos
                    .range([pi, z, z]..=[pi, m, m])
                    .map(|[p, o, s]| [*s, *p, *o]),
            ),
            (Some(si), None, Some(oi)) => Box::new(
                self.osp
                    .range([oi, si, z]..=[oi, si, m])
                    .map(|[o, s, p]| [*s, *p, *o]),
            ),
            (None, None, Some(oi)) => Box::new(
                self.osp
                    .range([oi, z, z]..=[oi, m, m])
                    .map(|[o, s, p]| [*s, *p, *o]),
            ),
            (None, None, None) => Box::new(self.spo.iter().copied()),
        }
    }

    /// The distinct values at position `pos` (0 for subject, 1 for predicate, 2 for object).
    fn distinct(&self, pos: usize) -> Vec<I> {
        let permutation = match pos {
            0 => &self.spo,
            1 => &self.pos,
            _ => &self.osp,
        };
        let mut ret: Vec<I> = permutation.iter().map(|k| k[0]).collect();
        ret.dedup();
        ret
    }
}

/// An indexed collection of asserted and quoted triples.
///
/// Every stored triple lives in an arena, keyed by the indices of its nodes in a [`TermIndex`].
/// Asserted and quoted triples are indexed separately,
/// each in three sorted permutations (SPO, POS, OSP).
///
/// Quoted triples are reference-counted:
/// when a triple becomes stored (first asserted or first quoted),
/// the count of each triple it directly quotes is incremented;
/// when it stops being stored, those counts are decremented,
/// and quoted triples that are no longer quoted nor asserted are released in cascade.
#[derive(Clone, Debug)]
pub struct GenericIndexedTripleCollection<I: Index> {
    terms: TermIndex<I>,
    entries: HashMap<Key<I>, TripleEntry<I>>,
    asserted: TripleIndex<I>,
    quoted: TripleIndex<I>,
}

impl<I: Index> GenericIndexedTripleCollection<I> {
    /// A new empty collection, comparing literals strictly.
    pub fn new() -> Self {
        Self::with_mode(LiteralEqualityMode::Strict)
    }

    /// A new empty collection, comparing literals according to `mode`.
    pub fn with_mode(mode: LiteralEqualityMode) -> Self {
        GenericIndexedTripleCollection {
            terms: TermIndex::new(mode),
            entries: HashMap::new(),
            asserted: TripleIndex::new(),
            quoted: TripleIndex::new(),
        }
    }

    /// Build a collection from the given triples.
    pub fn from_triples<T>(mode: LiteralEqualityMode, triples: T) -> Result<Self, CollectionError>
    where
        T: IntoIterator<Item = Triple>,
    {
        let mut c = Self::with_mode(mode);
        c.add_all(triples)?;
        Ok(c)
    }

    /// How many stored triples directly quote `triple`
    /// (0 if it is not quoted, or not in this collection).
    pub fn quote_count_of(&self, triple: &Triple) -> usize {
        self.get_key(triple)
            .and_then(|k| self.entries.get(&k))
            .map(|e| e.quote_count)
            .unwrap_or(0)
    }

    fn get_key(&self, t: &Triple) -> Option<Key<I>> {
        Some([
            self.terms.get_index(t.s())?,
            self.terms.get_index(t.p())?,
            self.terms.get_index(t.o())?,
        ])
    }

    fn ensure_key(&mut self, t: &Triple) -> Result<Key<I>, CollectionError> {
        Ok([
            self.terms.ensure_index(t.s())?,
            self.terms.ensure_index(t.p())?,
            self.terms.ensure_index(t.o())?,
        ])
    }

    /// Ensure that `t` and all the triples it quotes (recursively) have a key,
    /// so that storing them afterwards can not fail.
    fn ensure_keys_deep(&mut self, t: &Triple) -> Result<Key<I>, CollectionError> {
        let mut todo = vec![t];
        while let Some(t) = todo.pop() {
            self.ensure_key(t)?;
            todo.extend(t.quoted().map(|q| &**q));
        }
        self.ensure_key(t)
    }

    /// Insert `entry` in the arena, retaining the node indices of `key`.
    fn store(&mut self, key: Key<I>, entry: TripleEntry<I>) {
        for i in key {
            self.terms.retain(i);
        }
        self.entries.insert(key, entry);
    }

    /// Link the children of the entries in `todo` (which must have just been stored),
    /// storing the children that were not stored yet.
    fn link_children(&mut self, mut todo: Vec<Key<I>>) -> Result<(), CollectionError> {
        while let Some(key) = todo.pop() {
            let Some(triple) = self.entries.get(&key).map(|e| e.triple.clone()) else {
                continue;
            };
            let mut children = Vec::with_capacity(3);
            for child in triple.quoted() {
                let ckey = self.ensure_key(child)?;
                children.push(ckey);
                match self.entries.get_mut(&ckey) {
                    Some(centry) => {
                        if centry.quote_count == 0 {
                            self.quoted.insert(ckey);
                        }
                        centry.quote_count += 1;
                    }
                    None => {
                        log::trace!("storing quoted triple {child}");
                        self.store(
                            ckey,
                            TripleEntry {
                                triple: child.as_ref().clone(),
                                asserted: false,
                                quote_count: 1,
                                children: vec![],
                            },
                        );
                        self.quoted.insert(ckey);
                        todo.push(ckey);
                    }
                }
            }
            if let Some(entry) = self.entries.get_mut(&key) {
                entry.children = children;
            }
        }
        Ok(())
    }

    /// Remove the entry `key` (which must have stopped being stored),
    /// and release the triples it quotes in cascade,
    /// along with the node indices no other entry uses.
    fn release(&mut self, key: Key<I>) {
        let mut todo = vec![key];
        while let Some(key) = todo.pop() {
            let Some(entry) = self.entries.remove(&key) else {
                continue;
            };
            for i in key {
                self.terms.release(i);
            }
            for ckey in entry.children {
                let Some(centry) = self.entries.get_mut(&ckey) else {
                    continue;
                };
                debug_assert!(centry.quote_count > 0);
                centry.quote_count -= 1;
                if centry.quote_count == 0 {
                    self.quoted.remove(&ckey);
                    if !centry.asserted {
                        log::trace!("releasing quoted triple {}", centry.triple);
                        todo.push(ckey);
                    }
                }
            }
        }
    }

    fn pattern_keys(
        &self,
        s: Option<&Node>,
        p: Option<&Node>,
        o: Option<&Node>,
    ) -> Option<[Option<I>; 3]> {
        let mut ret = [None; 3];
        for (i, n) in [s, p, o].into_iter().enumerate() {
            if let Some(n) = n {
                ret[i] = Some(self.terms.get_index(n)?);
            }
        }
        Some(ret)
    }

    fn triples_of<'s>(&'s self, keys: impl Iterator<Item = Key<I>> + 's) -> TripleIter<'s> {
        Box::new(keys.filter_map(|k| self.entries.get(&k).map(|e| &e.triple)))
    }

    fn nodes_of(&self, indices: Vec<I>) -> Vec<&Node> {
        indices
            .into_iter()
            .filter_map(|i| self.terms.get_node(i))
            .collect()
    }

    /// The number of distinct nodes used by the stored (asserted or quoted) triples.
    pub fn node_count(&self) -> usize {
        self.terms.len()
    }
}

impl<I: Index> Default for GenericIndexedTripleCollection<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Index> TripleCollection for GenericIndexedTripleCollection<I> {
    type Error = CollectionError;

    fn add(&mut self, triple: Triple) -> Result<bool, CollectionError> {
        let key = match self.ensure_keys_deep(&triple) {
            Ok(key) => key,
            Err(err) => {
                self.terms.purge_unused();
                return Err(err);
            }
        };
        match self.entries.get_mut(&key) {
            Some(entry) if entry.asserted => Ok(false),
            Some(entry) => {
                // already stored as a quoted triple, so its children are already counted
                entry.asserted = true;
                self.asserted.insert(key);
                Ok(true)
            }
            None => {
                self.store(
                    key,
                    TripleEntry {
                        triple,
                        asserted: true,
                        quote_count: 0,
                        children: vec![],
                    },
                );
                self.asserted.insert(key);
                self.link_children(vec![key])?;
                Ok(true)
            }
        }
    }

    fn delete(&mut self, triple: &Triple) -> bool {
        let Some(key) = self.get_key(triple) else {
            return false;
        };
        let Some(entry) = self.entries.get_mut(&key) else {
            return false;
        };
        if !entry.asserted {
            return false;
        }
        entry.asserted = false;
        let still_quoted = entry.quote_count > 0;
        self.asserted.remove(&key);
        if !still_quoted {
            self.release(key);
        }
        true
    }

    fn contains(&self, triple: &Triple) -> bool {
        self.get_key(triple)
            .and_then(|k| self.entries.get(&k))
            .is_some_and(|e| e.asserted)
    }

    fn contains_quoted(&self, triple: &Triple) -> bool {
        self.get_key(triple)
            .and_then(|k| self.entries.get(&k))
            .is_some_and(|e| e.quote_count > 0)
    }

    fn count(&self) -> usize {
        self.asserted.len()
    }

    fn quoted_count(&self) -> usize {
        self.quoted.len()
    }

    fn asserted(&self) -> TripleIter<'_> {
        self.triples_of(self.asserted.matching(None, None, None))
    }

    fn quoted(&self) -> TripleIter<'_> {
        self.triples_of(self.quoted.matching(None, None, None))
    }

    fn matching<'s>(
        &'s self,
        s: Option<&Node>,
        p: Option<&Node>,
        o: Option<&Node>,
    ) -> TripleIter<'s> {
        match self.pattern_keys(s, p, o) {
            None => Box::new(empty()),
            Some([si, pi, oi]) => self.triples_of(self.asserted.matching(si, pi, oi)),
        }
    }

    fn quoted_matching<'s>(
        &'s self,
        s: Option<&Node>,
        p: Option<&Node>,
        o: Option<&Node>,
    ) -> TripleIter<'s> {
        match self.pattern_keys(s, p, o) {
            None => Box::new(empty()),
            Some([si, pi, oi]) => self.triples_of(self.quoted.matching(si, pi, oi)),
        }
    }

    fn subject_nodes(&self) -> Vec<&Node> {
        self.nodes_of(self.asserted.distinct(0))
    }

    fn predicate_nodes(&self) -> Vec<&Node> {
        self.nodes_of(self.asserted.distinct(1))
    }

    fn object_nodes(&self) -> Vec<&Node> {
        self.nodes_of(self.asserted.distinct(2))
    }

    fn clear(&mut self) {
        self.terms.clear();
        self.entries.clear();
        self.asserted.clear();
        self.quoted.clear();
    }

    fn equality_mode(&self) -> LiteralEqualityMode {
        self.terms.mode()
    }
}

/// An indexed triple collection with 32-bit term indices.
pub type IndexedTripleCollection = GenericIndexedTripleCollection<u32>;

#[cfg(test)]
mod test {
    use super::*;
    use std::sync::Arc;
    use test_case::test_case;
    use trigon_term::ns::xsd;
    use trigon_term::NodeFactory;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn ex(f: &NodeFactory, suffix: &str) -> Node {
        f.iri(format!("http://example.org/{suffix}")).unwrap()
    }

    fn t(s: Node, p: Node, o: Node) -> Triple {
        Triple::new(s, p, o)
    }

    #[test]
    fn add_delete_idempotence() -> TestResult {
        let f = NodeFactory::new();
        let tr = t(ex(&f, "s"), ex(&f, "p"), ex(&f, "o"));
        let mut c = IndexedTripleCollection::new();
        assert!(c.add(tr.clone())?);
        assert!(!c.add(tr.clone())?);
        assert_eq!(c.count(), 1);
        assert!(c.contains(&tr));
        assert!(c.delete(&tr));
        assert!(!c.delete(&tr));
        assert_eq!(c.count(), 0);
        assert!(!c.contains(&tr));
        assert!(c.is_empty());
        Ok(())
    }

    #[test]
    fn cascade_delete() -> TestResult {
        let f = NodeFactory::new();
        let quoted = t(ex(&f, "a"), ex(&f, "b"), ex(&f, "c"));
        let outer = t(quoted.clone().into(), ex(&f, "said"), f.literal("x"));
        let mut c = IndexedTripleCollection::new();
        c.add(outer.clone())?;
        assert_eq!(c.count(), 1);
        assert_eq!(c.quoted_count(), 1);
        assert!(c.contains_quoted(&quoted));
        assert!(!c.contains(&quoted));
        assert!(!c.delete(&quoted), "quoted-only triples are not deletable");

        assert!(c.delete(&outer));
        assert_eq!(c.count(), 0);
        assert_eq!(c.quoted_count(), 0);
        assert!(!c.contains_quoted(&quoted));
        Ok(())
    }

    #[test]
    fn nested_quoting() -> TestResult {
        let f = NodeFactory::new();
        let t1 = t(ex(&f, "a"), ex(&f, "b"), ex(&f, "c"));
        let t2 = t(t1.clone().into(), ex(&f, "p"), ex(&f, "o"));
        let t3 = t(t2.clone().into(), ex(&f, "q"), t1.clone().into());
        let mut c = IndexedTripleCollection::new();
        c.add(t3.clone())?;
        assert_eq!(c.count(), 1);
        assert_eq!(c.quoted_count(), 2);
        assert_eq!(c.quote_count_of(&t1), 2);
        assert_eq!(c.quote_count_of(&t2), 1);

        assert!(c.delete(&t3));
        assert_eq!(c.quoted_count(), 0);
        assert_eq!(c.quote_count_of(&t1), 0);
        Ok(())
    }

    #[test]
    fn asserted_and_quoted() -> TestResult {
        let f = NodeFactory::new();
        let t1 = t(ex(&f, "a"), ex(&f, "b"), ex(&f, "c"));
        let t2 = t(t1.clone().into(), ex(&f, "p"), ex(&f, "o"));
        let mut c = IndexedTripleCollection::new();
        c.add(t1.clone())?;
        c.add(t2.clone())?;
        assert!(c.contains(&t1));
        assert!(c.contains_quoted(&t1));

        // still asserted after its quoting triple is gone
        assert!(c.delete(&t2));
        assert!(c.contains(&t1));
        assert!(!c.contains_quoted(&t1));

        // still quoted after being retracted
        c.add(t2.clone())?;
        assert!(c.delete(&t1));
        assert!(!c.contains(&t1));
        assert!(c.contains_quoted(&t1));
        assert_eq!(c.quoted_with_subject(&ex(&f, "a")).count(), 1);
        assert_eq!(c.with_subject(&ex(&f, "a")).count(), 0);

        // asserting a quoted triple does not count its children twice
        let t0 = t(ex(&f, "x"), ex(&f, "y"), ex(&f, "z"));
        let t4 = t(t0.clone().into(), ex(&f, "p"), ex(&f, "o"));
        let t5 = t(t4.clone().into(), ex(&f, "p"), ex(&f, "o"));
        c.add(t5.clone())?;
        c.add(t4.clone())?;
        assert_eq!(c.quote_count_of(&t0), 1);
        assert!(c.delete(&t5));
        assert!(c.contains_quoted(&t0));
        assert!(c.delete(&t4));
        assert!(!c.contains_quoted(&t0));
        Ok(())
    }

    #[test]
    fn shared_quoted_triple() -> TestResult {
        let f = NodeFactory::new();
        let q = t(ex(&f, "a"), ex(&f, "b"), ex(&f, "c"));
        let t1 = t(q.clone().into(), ex(&f, "p1"), ex(&f, "o"));
        let t2 = t(ex(&f, "s"), ex(&f, "p2"), q.clone().into());
        let mut c = IndexedTripleCollection::new();
        c.add(t1.clone())?;
        c.add(t2.clone())?;
        assert_eq!(c.quote_count_of(&q), 2);
        c.delete(&t1);
        assert!(c.contains_quoted(&q));
        c.delete(&t2);
        assert!(!c.contains_quoted(&q));
        Ok(())
    }

    #[test]
    fn matching() -> TestResult {
        let f = NodeFactory::new();
        let [s1, s2, p1, p2, o1, o2] = ["s1", "s2", "p1", "p2", "o1", "o2"].map(|x| ex(&f, x));
        let mut c = IndexedTripleCollection::new();
        for s in [&s1, &s2] {
            for p in [&p1, &p2] {
                for o in [&o1, &o2] {
                    c.add(t(s.clone(), p.clone(), o.clone()))?;
                }
            }
        }
        assert_eq!(c.count(), 8);
        assert_eq!(c.asserted().count(), 8);
        assert_eq!(c.with_subject(&s1).count(), 4);
        assert_eq!(c.with_predicate(&p1).count(), 4);
        assert_eq!(c.with_object(&o2).count(), 4);
        assert_eq!(c.with_subject_predicate(&s1, &p2).count(), 2);
        assert_eq!(c.with_subject_object(&s2, &o1).count(), 2);
        assert_eq!(c.with_predicate_object(&p1, &o1).count(), 2);
        assert_eq!(c.with_subject_predicate_object(&s1, &p1, &o1).count(), 1);
        assert!(c
            .with_predicate_object(&p1, &o1)
            .all(|tr| tr.p() == &p1 && tr.o() == &o1));
        assert_eq!(c.matching(Some(&ex(&f, "unknown")), None, None).count(), 0);
        assert_eq!(c.matching(None, None, None).count(), 8);
        assert_eq!(c.subject_nodes().len(), 2);
        assert_eq!(c.predicate_nodes().len(), 2);
        assert_eq!(c.object_nodes().len(), 2);
        Ok(())
    }

    #[test_case(Some("s1"), None, None => 4; "subject")]
    #[test_case(None, Some("p2"), None => 4; "predicate")]
    #[test_case(None, None, Some("o1") => 4; "object")]
    #[test_case(Some("s2"), Some("p1"), None => 2; "subject predicate")]
    #[test_case(Some("s1"), None, Some("o2") => 2; "subject object")]
    #[test_case(None, Some("p2"), Some("o2") => 2; "predicate object")]
    #[test_case(Some("s2"), Some("p2"), Some("o1") => 1; "fully bound")]
    #[test_case(Some("o1"), None, None => 0; "object as subject")]
    #[test_case(None, None, None => 8; "wildcard")]
    fn matching_pattern(s: Option<&str>, p: Option<&str>, o: Option<&str>) -> usize {
        let f = NodeFactory::new();
        let mut c = IndexedTripleCollection::new();
        for s in ["s1", "s2"] {
            for p in ["p1", "p2"] {
                for o in ["o1", "o2"] {
                    c.add(t(ex(&f, s), ex(&f, p), ex(&f, o))).unwrap();
                }
            }
        }
        let [s, p, o] = [s, p, o].map(|x| x.map(|x| ex(&f, x)));
        c.matching(s.as_ref(), p.as_ref(), o.as_ref()).count()
    }

    #[test]
    fn loose_collection() -> TestResult {
        let f = NodeFactory::new();
        let s = ex(&f, "s");
        let p = ex(&f, "p");
        let t1 = t(s.clone(), p.clone(), f.literal_dt("01", xsd::integer)?);
        let t2 = t(s.clone(), p.clone(), f.literal_dt("1", xsd::integer)?);

        let mut strict = IndexedTripleCollection::new();
        strict.add_all([t1.clone(), t2.clone()])?;
        assert_eq!(strict.count(), 2);

        let mut loose = IndexedTripleCollection::with_mode(LiteralEqualityMode::Loose);
        assert_eq!(loose.add_all([t1.clone(), t2.clone()])?, 1);
        assert!(loose.contains(&t2));
        assert_eq!(loose.asserted().next(), Some(&t1));
        assert!(loose.delete(&t2));
        assert!(loose.is_empty());
        Ok(())
    }

    #[test]
    fn cascade_releases_nodes() -> TestResult {
        let f = NodeFactory::new();
        let t1 = Arc::new(t(ex(&f, "a"), ex(&f, "b"), ex(&f, "c")));
        let q1 = Node::Triple(t1.clone());
        let t2 = Arc::new(t(q1.clone(), ex(&f, "p"), ex(&f, "o")));
        let t3 = t(Node::Triple(t2.clone()), ex(&f, "q"), q1);
        let before = (Arc::strong_count(&t1), Arc::strong_count(&t2));

        let mut c = IndexedTripleCollection::new();
        c.add(t3.clone())?;
        assert_eq!(c.node_count(), 8);
        assert!(Arc::strong_count(&t1) > before.0);
        assert!(Arc::strong_count(&t2) > before.1);

        assert!(c.delete(&t3));
        assert_eq!(c.quoted_count(), 0);
        assert_eq!(c.node_count(), 0);
        assert_eq!((Arc::strong_count(&t1), Arc::strong_count(&t2)), before);
        Ok(())
    }

    #[test]
    fn shared_nodes_outlive_released_triples() -> TestResult {
        let f = NodeFactory::new();
        let t1 = t(ex(&f, "a"), ex(&f, "p"), ex(&f, "b"));
        let t2 = t(ex(&f, "a"), ex(&f, "p"), ex(&f, "c"));
        let mut c = IndexedTripleCollection::new();
        c.add(t1.clone())?;
        c.add(t2.clone())?;
        assert_eq!(c.node_count(), 4);
        assert!(c.delete(&t1));
        assert_eq!(c.node_count(), 3);
        assert_eq!(c.with_subject(&ex(&f, "a")).count(), 1);
        assert_eq!(c.object_nodes(), vec![&ex(&f, "c")]);
        // a released index is reused by the next new node
        c.add(t(ex(&f, "a"), ex(&f, "p"), ex(&f, "d")))?;
        assert_eq!(c.node_count(), 4);
        assert_eq!(c.with_predicate(&ex(&f, "p")).count(), 2);
        assert!(!c.contains(&t1));
        Ok(())
    }

    #[test_case(Some("s1"), None, None => 4; "subject")]
    #[test_case(None, Some("p2"), None => 4; "predicate")]
    #[test_case(None, None, Some("o1") => 4; "object")]
    #[test_case(Some("s2"), Some("p1"), None => 2; "subject predicate")]
    #[test_case(Some("s1"), None, Some("o2") => 2; "subject object")]
    #[test_case(None, Some("p2"), Some("o2") => 2; "predicate object")]
    #[test_case(Some("s2"), Some("p2"), Some("o1") => 1; "fully bound")]
    #[test_case(None, Some("says"), None => 0; "asserted predicate")]
    #[test_case(None, None, None => 8; "wildcard")]
    fn quoted_matching_pattern(s: Option<&str>, p: Option<&str>, o: Option<&str>) -> usize {
        let f = NodeFactory::new();
        let mut c = IndexedTripleCollection::new();
        for s in ["s1", "s2"] {
            for p in ["p1", "p2"] {
                for o in ["o1", "o2"] {
                    let quoted = t(ex(&f, s), ex(&f, p), ex(&f, o));
                    c.add(t(quoted.into(), ex(&f, "says"), ex(&f, "x")))
                        .unwrap();
                }
            }
        }
        let [s, p, o] = [s, p, o].map(|x| x.map(|x| ex(&f, x)));
        let got: Vec<_> = c
            .quoted_matching(s.as_ref(), p.as_ref(), o.as_ref())
            .collect();
        assert!(got.iter().all(|tr| !c.contains(tr)));
        got.len()
    }

    #[test]
    fn clear() -> TestResult {
        let f = NodeFactory::new();
        let q = t(ex(&f, "a"), ex(&f, "b"), ex(&f, "c"));
        let mut c = IndexedTripleCollection::from_triples(
            LiteralEqualityMode::Strict,
            [t(q.into(), ex(&f, "p"), ex(&f, "o"))],
        )?;
        c.clear();
        assert_eq!(c.count(), 0);
        assert_eq!(c.quoted_count(), 0);
        Ok(())
    }
}

/// Flavors of indexed triple collections with a smaller memory-footprint.
///
/// The trade-off is that these implementations can only contain a small number (2^16) of distinct nodes.
pub mod small {
    /// An indexed triple collection with 16-bit term indices.
    pub type IndexedTripleCollection = super::GenericIndexedTripleCollection<u16>;

}
