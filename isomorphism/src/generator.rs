//! I define [`MappingGenerator`],
//! a lazy enumeration of candidate mappings.
use std::collections::HashMap;
use std::hash::Hash;

/// Lazily enumerates every complete mapping
/// compatible with a base mapping and a list of candidates per key.
///
/// Keys already present in the base mapping are pinned,
/// and their candidates are ignored.
/// Every other key is mapped, in turn, to each of its candidates,
/// so the number of generated mappings is the product of the sizes
/// of the candidate lists of the free keys.
///
/// ```
/// # use std::collections::HashMap;
/// # use trigon_isomorphism::MappingGenerator;
/// let candidates = vec![("a", vec![1, 2]), ("b", vec![1, 2]), ("c", vec![3])];
/// let base = HashMap::from([("b", 2)]);
/// let mappings: Vec<_> = MappingGenerator::new(base, candidates).collect();
/// assert_eq!(mappings.len(), 2);
/// assert!(mappings.iter().all(|m| m["b"] == 2 && m["c"] == 3));
/// ```
#[derive(Clone, Debug)]
pub struct MappingGenerator<K, V> {
    base: HashMap<K, V>,
    keys: Vec<K>,
    candidates: Vec<Vec<V>>,
    cursor: Option<Vec<usize>>,
}

impl<K, V> MappingGenerator<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
{
    /// Build a generator on top of `base`.
    pub fn new<I>(base: HashMap<K, V>, candidates: I) -> Self
    where
        I: IntoIterator<Item = (K, Vec<V>)>,
    {
        let (keys, candidates): (Vec<_>, Vec<_>) = candidates
            .into_iter()
            .filter(|(k, _)| !base.contains_key(k))
            .unzip();
        let cursor = if candidates.iter().any(Vec::is_empty) {
            None
        } else {
            Some(vec![0; keys.len()])
        };
        MappingGenerator {
            base,
            keys,
            candidates,
            cursor,
        }
    }

    /// The total number of mappings this generator yields from its start,
    /// or `None` if that number overflows `usize`.
    pub fn combinations(&self) -> Option<usize> {
        self.candidates
            .iter()
            .try_fold(1_usize, |acc, c| acc.checked_mul(c.len()))
    }

    fn current(&self, cursor: &[usize]) -> HashMap<K, V> {
        let mut mapping = self.base.clone();
        for ((k, c), i) in self.keys.iter().zip(&self.candidates).zip(cursor) {
            mapping.insert(k.clone(), c[*i].clone());
        }
        mapping
    }
}

impl<K, V> Iterator for MappingGenerator<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
{
    type Item = HashMap<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut cursor = self.cursor.take()?;
        let mapping = self.current(&cursor);
        // odometer increment, the last key turning fastest
        for i in (0..cursor.len()).rev() {
            cursor[i] += 1;
            if cursor[i] < self.candidates[i].len() {
                self.cursor = Some(cursor);
                return Some(mapping);
            }
            cursor[i] = 0;
        }
        Some(mapping)
    }
}
