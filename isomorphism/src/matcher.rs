//! I define [`GraphMatcher`], deciding whether two graphs are equal
//! (or whether one is a sub-graph of the other) up to a renaming of their blank nodes.
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use trigon_inmem::TripleCollection;
use trigon_term::{BlankNode, LiteralEqualityMode, Node, Triple};

use crate::generator::MappingGenerator;
use crate::hash::*;
use crate::MatchError;

/// A mapping from the blank nodes of a graph to the blank nodes of another graph.
pub type BlankMapping = HashMap<BlankNode, BlankNode>;

/// Default value for [`MatcherConfig::max_attempts`].
pub const DEFAULT_MAX_ATTEMPTS: usize = 1_000_000;

/// Default value for [`MatcherConfig::brute_force_limit`].
pub const DEFAULT_BRUTE_FORCE_LIMIT: usize = 256;

/// Configuration of a [`GraphMatcher`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MatcherConfig {
    /// How literals are compared.
    pub mode: LiteralEqualityMode,
    /// The maximum number of candidate mappings verified and search branches explored
    /// before giving up with [`MatchError::BudgetExhausted`].
    /// `None` means no limit.
    pub max_attempts: Option<usize>,
    /// When the remaining candidate mappings are at most that many,
    /// they are all enumerated rather than explored by pinning blank nodes one at a time.
    pub brute_force_limit: usize,
}

impl MatcherConfig {
    /// Change the literal equality mode.
    pub fn with_mode(mut self, mode: LiteralEqualityMode) -> Self {
        self.mode = mode;
        self
    }

    /// Change the maximum number of attempts.
    pub fn with_max_attempts(mut self, max_attempts: Option<usize>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Change the brute force limit.
    pub fn with_brute_force_limit(mut self, brute_force_limit: usize) -> Self {
        self.brute_force_limit = brute_force_limit;
        self
    }
}

impl Default for MatcherConfig {
    fn default() -> Self {
        MatcherConfig {
            mode: LiteralEqualityMode::Strict,
            max_attempts: Some(DEFAULT_MAX_ATTEMPTS),
            brute_force_limit: DEFAULT_BRUTE_FORCE_LIMIT,
        }
    }
}

/// Decides graph equality and sub-graph inclusion under blank node renaming.
///
/// On success, every method returns one mapping of the blank nodes of its first graph
/// to the blank nodes of its second graph
/// (resp. of the sub-graph to the super-graph) that witnesses the match.
/// Ground nodes map to themselves, and are not part of the mapping.
///
/// The search is bounded by [`MatcherConfig::max_attempts`]:
/// a match that could be neither proved nor disproved within that budget
/// is reported as [`MatchError::BudgetExhausted`].
#[derive(Clone, Copy, Debug, Default)]
pub struct GraphMatcher {
    config: MatcherConfig,
}

impl GraphMatcher {
    /// A new matcher with the given configuration.
    pub fn new(config: MatcherConfig) -> Self {
        GraphMatcher { config }
    }

    /// The configuration of this matcher.
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Whether `a` and `b` are equal up to a renaming of their blank nodes.
    pub fn equals<G1, G2>(&self, a: &G1, b: &G2) -> Result<Option<BlankMapping>, MatchError>
    where
        G1: TripleCollection + ?Sized,
        G2: TripleCollection + ?Sized,
    {
        self.match_triples(Goal::Equal, a.asserted(), b.asserted())
    }

    /// Like [`equals`](GraphMatcher::equals), where a missing graph is equal only to another missing graph.
    pub fn equals_opt<G1, G2>(
        &self,
        a: Option<&G1>,
        b: Option<&G2>,
    ) -> Result<Option<BlankMapping>, MatchError>
    where
        G1: TripleCollection + ?Sized,
        G2: TripleCollection + ?Sized,
    {
        match (a, b) {
            (None, None) => Ok(Some(BlankMapping::new())),
            (Some(a), Some(b)) => self.equals(a, b),
            _ => Ok(None),
        }
    }

    /// Whether `sub` is a sub-graph of `sup`, up to a renaming of the blank nodes of `sub`.
    pub fn is_sub_graph_of<G1, G2>(
        &self,
        sub: &G1,
        sup: &G2,
    ) -> Result<Option<BlankMapping>, MatchError>
    where
        G1: TripleCollection + ?Sized,
        G2: TripleCollection + ?Sized,
    {
        self.match_triples(Goal::SubGraph, sub.asserted(), sup.asserted())
    }

    /// Whether `sub` is a sub-graph of `sup`, up to a renaming of the blank nodes of `sub`.
    ///
    /// The returned mapping goes from the blank nodes of `sub` to those of `sup`.
    pub fn has_sub_graph<G1, G2>(
        &self,
        sup: &G1,
        sub: &G2,
    ) -> Result<Option<BlankMapping>, MatchError>
    where
        G1: TripleCollection + ?Sized,
        G2: TripleCollection + ?Sized,
    {
        self.is_sub_graph_of(sub, sup)
    }

    pub(crate) fn match_triples<'a, 'b, I1, I2>(
        &self,
        goal: Goal,
        a: I1,
        b: I2,
    ) -> Result<Option<BlankMapping>, MatchError>
    where
        I1: IntoIterator<Item = &'a Triple>,
        I2: IntoIterator<Item = &'b Triple>,
    {
        let a = Side::new(a, self.config.mode);
        let b = Side::new(b, self.config.mode);
        Search::new(goal, &self.config, &a, &b).run()
    }
}

/// Whether `a` and `b` are equal up to a renaming of their blank nodes,
/// comparing literals the way `a` does.
///
/// A match that can not be decided within the default budget is reported as `false`.
pub fn isomorphic<G1, G2>(a: &G1, b: &G2) -> bool
where
    G1: TripleCollection + ?Sized,
    G2: TripleCollection + ?Sized,
{
    let config = MatcherConfig::default().with_mode(a.equality_mode());
    graphs_equal(Some(a), Some(b), config)
}

/// Whether `a` and `b` are equal up to a renaming of their blank nodes,
/// where a missing graph is equal only to another missing graph.
///
/// A match that can not be decided within the budget of `config` is reported as `false`.
pub fn graphs_equal<G1, G2>(a: Option<&G1>, b: Option<&G2>, config: MatcherConfig) -> bool
where
    G1: TripleCollection + ?Sized,
    G2: TripleCollection + ?Sized,
{
    matches!(GraphMatcher::new(config).equals_opt(a, b), Ok(Some(_)))
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Goal {
    Equal,
    SubGraph,
}

/// The triples of one of the graphs being matched, with literals in canonical form.
struct Side {
    ground: HashSet<Triple>,
    triples: Vec<Triple>,
    lookup: HashSet<Triple>,
    blanks: Vec<BlankNode>,
    occurrences: HashMap<BlankNode, Vec<usize>>,
}

impl Side {
    fn new<'a, I>(triples: I, mode: LiteralEqualityMode) -> Self
    where
        I: IntoIterator<Item = &'a Triple>,
    {
        let mut ground = HashSet::new();
        let mut lookup = HashSet::new();
        for t in triples {
            let t = canonical_triple(t, mode);
            if t.is_ground() {
                ground.insert(t);
            } else {
                lookup.insert(t);
            }
        }
        let mut triples: Vec<Triple> = lookup.iter().cloned().collect();
        triples.sort();
        let mut occurrences: HashMap<BlankNode, Vec<usize>> = HashMap::new();
        for (i, t) in triples.iter().enumerate() {
            let blanks: BTreeSet<&BlankNode> = t.blank_nodes().into_iter().collect();
            for b in blanks {
                occurrences.entry(b.clone()).or_default().push(i);
            }
        }
        let mut blanks: Vec<BlankNode> = occurrences.keys().cloned().collect();
        blanks.sort();
        Side {
            ground,
            triples,
            lookup,
            blanks,
            occurrences,
        }
    }

    fn triples_of<'s>(&'s self, b: &BlankNode) -> impl Iterator<Item = &'s Triple> + 's {
        self.occurrences
            .get(b)
            .into_iter()
            .flatten()
            .map(|i| &self.triples[*i])
    }

    fn signatures(&self) -> HashMap<&BlankNode, Signature> {
        self.blanks
            .iter()
            .map(|b| (b, signature(self.triples_of(b), b)))
            .collect()
    }

    fn refine(&self, colours: &Colours) -> Colours {
        self.blanks
            .iter()
            .map(|b| {
                let patterns = self
                    .triples_of(b)
                    .map(|t| pattern_hash(t, colours, b))
                    .collect();
                (b.clone(), refined_colour(colour_of(colours, b), patterns))
            })
            .collect()
    }
}

pub(crate) fn canonical_triple(t: &Triple, mode: LiteralEqualityMode) -> Triple {
    let [s, p, o] = t.spo().map(|n| n.canonical(mode).into_owned());
    Triple::new(s, p, o)
}

type Candidates = BTreeMap<BlankNode, BTreeSet<BlankNode>>;

struct Search<'a> {
    goal: Goal,
    config: &'a MatcherConfig,
    a: &'a Side,
    b: &'a Side,
    colours: (Colours, Colours),
    attempts: usize,
}

impl<'a> Search<'a> {
    fn new(goal: Goal, config: &'a MatcherConfig, a: &'a Side, b: &'a Side) -> Self {
        Search {
            goal,
            config,
            a,
            b,
            colours: (Colours::new(), Colours::new()),
            attempts: 0,
        }
    }

    fn run(mut self) -> Result<Option<BlankMapping>, MatchError> {
        if !self.ground_check() {
            log::debug!("{:?}: ground check failed", self.goal);
            return Ok(None);
        }
        if self.a.blanks.is_empty() {
            log::debug!("{:?}: no blank node, ground check is conclusive", self.goal);
            return Ok(Some(BlankMapping::new()));
        }
        let Some(mut candidates) = self.seed() else {
            log::debug!("{:?}: some blank node has no candidate", self.goal);
            return Ok(None);
        };
        if self.goal == Goal::Equal && !self.refine_colours(&mut candidates) {
            log::debug!("{:?}: colour refinement failed", self.goal);
            return Ok(None);
        }
        if !self.propagate(&mut candidates) {
            log::debug!("{:?}: neighbour consistency failed", self.goal);
            return Ok(None);
        }
        log::debug!(
            "{:?}: {} of {} blank nodes resolved by refinement",
            self.goal,
            candidates.values().filter(|c| c.len() == 1).count(),
            candidates.len(),
        );
        let ret = self.complete(candidates);
        log::debug!("{:?}: search ended after {} attempts", self.goal, self.attempts);
        ret
    }

    /// Phase 1: ground triples and sizes.
    fn ground_check(&self) -> bool {
        let (a, b) = (self.a, self.b);
        match self.goal {
            Goal::Equal => {
                a.ground == b.ground
                    && a.triples.len() == b.triples.len()
                    && a.blanks.len() == b.blanks.len()
            }
            Goal::SubGraph => {
                a.ground.is_subset(&b.ground)
                    && a.triples.len() <= b.triples.len()
                    && a.blanks.len() <= b.blanks.len()
            }
        }
    }

    /// Phase 2: candidates with compatible local signatures.
    fn seed(&mut self) -> Option<Candidates> {
        let (a, b) = (self.a, self.b);
        let sig_a = a.signatures();
        let sig_b = b.signatures();
        let mut candidates = Candidates::new();
        for x in &a.blanks {
            let sx = sig_a.get(x)?;
            let cx: BTreeSet<BlankNode> = b
                .blanks
                .iter()
                .filter(|y| sig_b.get(y).is_some_and(|sy| self.compatible(sx, sy)))
                .cloned()
                .collect();
            if cx.is_empty() {
                log::trace!("no candidate for {x}");
                return None;
            }
            candidates.insert(x.clone(), cx);
        }
        if self.goal == Goal::Equal {
            self.colours = (
                sig_a.iter().map(|(x, s)| ((*x).clone(), signature_colour(s))).collect(),
                sig_b.iter().map(|(y, s)| ((*y).clone(), signature_colour(s))).collect(),
            );
        }
        Some(candidates)
    }

    fn compatible(&self, sx: &Signature, sy: &Signature) -> bool {
        match self.goal {
            Goal::Equal => sx == sy,
            Goal::SubGraph => sx
                .iter()
                .all(|(pattern, n)| sy.get(pattern).is_some_and(|m| m >= n)),
        }
    }

    /// Phase 3a: colour refinement, run in lock-step on both graphs.
    ///
    /// Only sound for equality.
    fn refine_colours(&mut self, candidates: &mut Candidates) -> bool {
        let (mut ca, mut cb) = self.colours.clone();
        if !refine_lock_step(self.a, self.b, &mut ca, &mut cb) {
            return false;
        }
        let ok = restrict_to_colours(candidates, &ca, &cb);
        self.colours = (ca, cb);
        ok
    }

    /// Colour refinement after some blank nodes have been pinned to a single candidate.
    fn refine_pinned(&self, candidates: &mut Candidates) -> bool {
        let (mut ca, mut cb) = self.colours.clone();
        for (rank, (x, cx)) in candidates.iter().enumerate() {
            if let (1, Some(y)) = (cx.len(), cx.first()) {
                let pinned = pinned_colour(colour_of(&ca, x), rank);
                ca.insert(x.clone(), pinned);
                cb.insert(y.clone(), pinned);
            }
        }
        refine_lock_step(self.a, self.b, &mut ca, &mut cb)
            && restrict_to_colours(candidates, &ca, &cb)
    }

    /// Phase 3b: keep only the candidates that are consistent with the candidates of neighbours,
    /// until a fixed point is reached.
    ///
    /// Return false if some blank node has no candidate left.
    fn propagate(&self, candidates: &mut Candidates) -> bool {
        let mut round = 0;
        loop {
            round += 1;
            let mut changed = false;
            if !prune_taken(candidates, &mut changed) {
                return false;
            }
            for x in &self.a.blanks {
                let Some(cx) = candidates.get(x) else {
                    return false;
                };
                let kept: BTreeSet<BlankNode> = cx
                    .iter()
                    .filter(|y| self.supported(x, y, candidates))
                    .cloned()
                    .collect();
                if kept.is_empty() {
                    log::trace!("propagation round {round}: no candidate left for {x}");
                    return false;
                }
                if kept.len() < cx.len() {
                    changed = true;
                    candidates.insert(x.clone(), kept);
                }
            }
            log::trace!("propagation round {round}: changed={changed}");
            if !changed {
                return true;
            }
        }
    }

    /// Whether every triple involving `x` has an image involving `y`,
    /// given the current candidates.
    fn supported(&self, x: &BlankNode, y: &BlankNode, candidates: &Candidates) -> bool {
        self.a.triples_of(x).all(|t1| {
            self.b.triples_of(y).any(|t2| {
                let mut assignment = Assignment::default();
                assignment.bind(x, y) && unify_triples(t1, t2, &mut assignment, candidates)
            })
        })
    }

    /// Phase 4: bounded search for a mapping.
    fn complete(&mut self, candidates: Candidates) -> Result<Option<BlankMapping>, MatchError> {
        let pinned: BlankMapping = candidates
            .iter()
            .filter(|(_, cx)| cx.len() == 1)
            .filter_map(|(x, cx)| Some((x.clone(), cx.first()?.clone())))
            .collect();
        let free: Vec<(&BlankNode, &BTreeSet<BlankNode>)> =
            candidates.iter().filter(|(_, cx)| cx.len() > 1).collect();

        if free.is_empty() {
            self.attempt()?;
            return Ok(self.verify(&pinned).then_some(pinned));
        }

        let combinations = free
            .iter()
            .try_fold(1_usize, |acc, (_, cx)| acc.checked_mul(cx.len()));
        if combinations.is_some_and(|n| n <= self.config.brute_force_limit) {
            log::trace!(
                "brute force over {} mappings for {} ambiguous blank nodes",
                combinations.unwrap_or_default(),
                free.len(),
            );
            let free = free
                .into_iter()
                .map(|(x, cx)| (x.clone(), cx.iter().cloned().collect::<Vec<_>>()));
            for mapping in MappingGenerator::new(pinned, free) {
                self.attempt()?;
                if is_injective(&mapping) && self.verify(&mapping) {
                    return Ok(Some(mapping));
                }
            }
            return Ok(None);
        }

        let Some((x, cx)) = free.into_iter().min_by_key(|(_, cx)| cx.len()) else {
            return Ok(None);
        };
        for y in cx {
            self.attempt()?;
            log::trace!("pinning {x} to {y} (1 of {})", cx.len());
            let mut branch = candidates.clone();
            branch.insert(x.clone(), BTreeSet::from([y.clone()]));
            if self.narrow(&mut branch) {
                if let Some(mapping) = self.complete(branch)? {
                    return Ok(Some(mapping));
                }
            }
        }
        Ok(None)
    }

    fn narrow(&self, candidates: &mut Candidates) -> bool {
        match self.goal {
            Goal::Equal => {
                self.propagate(candidates)
                    && self.refine_pinned(candidates)
                    && self.propagate(candidates)
            }
            Goal::SubGraph => self.propagate(candidates),
        }
    }

    fn attempt(&mut self) -> Result<(), MatchError> {
        self.attempts += 1;
        match self.config.max_attempts {
            Some(max) if self.attempts > max => {
                log::warn!("{:?}: giving up after {max} attempts", self.goal);
                Err(MatchError::BudgetExhausted(max))
            }
            _ => Ok(()),
        }
    }

    /// Whether `mapping` maps every non-ground triple of `a` to a triple of `b`.
    ///
    /// For equality, the sizes of both graphs have already been checked,
    /// so an injective mapping passing this test is a bijection.
    fn verify(&self, mapping: &BlankMapping) -> bool {
        self.a.triples.iter().all(|t| {
            let image = t.map_blank_nodes(&mut |x| {
                Node::Blank(mapping.get(x).unwrap_or(x).clone())
            });
            self.b.lookup.contains(&image)
        })
    }
}

/// Run colour refinement on both sides until the partition stops splitting.
///
/// Return false as soon as both sides disagree on the number of nodes of some colour.
fn refine_lock_step(a: &Side, b: &Side, ca: &mut Colours, cb: &mut Colours) -> bool {
    let mut classes = colour_count(ca);
    let mut round = 0;
    loop {
        if histogram(ca) != histogram(cb) {
            log::trace!("refinement round {round}: colour histograms differ");
            return false;
        }
        round += 1;
        *ca = a.refine(ca);
        *cb = b.refine(cb);
        let new_classes = colour_count(ca);
        log::trace!("refinement round {round}: {classes} -> {new_classes} colours");
        if new_classes == classes {
            return histogram(ca) == histogram(cb);
        }
        classes = new_classes;
    }
}

fn restrict_to_colours(candidates: &mut Candidates, ca: &Colours, cb: &Colours) -> bool {
    for (x, cx) in candidates.iter_mut() {
        let colour = colour_of(ca, x);
        cx.retain(|y| colour_of(cb, y) == colour);
        if cx.is_empty() {
            return false;
        }
    }
    true
}

fn colour_count(colours: &Colours) -> usize {
    colours.values().collect::<HashSet<_>>().len()
}

fn histogram(colours: &Colours) -> HashMap<u64, usize> {
    let mut ret = HashMap::new();
    for c in colours.values() {
        *ret.entry(*c).or_default() += 1;
    }
    ret
}

/// Remove the candidates already taken by a resolved blank node from every other candidate set.
///
/// Return false if two blank nodes are resolved to the same candidate,
/// or if some blank node has no candidate left.
fn prune_taken(candidates: &mut Candidates, changed: &mut bool) -> bool {
    loop {
        let mut taken: HashMap<BlankNode, BlankNode> = HashMap::new();
        for (x, cx) in candidates.iter() {
            if let (1, Some(y)) = (cx.len(), cx.first()) {
                if taken.insert(y.clone(), x.clone()).is_some() {
                    return false;
                }
            }
        }
        let mut pruned = false;
        for (x, cx) in candidates.iter_mut() {
            if cx.len() > 1 {
                let before = cx.len();
                cx.retain(|y| !taken.contains_key(y));
                if cx.is_empty() {
                    log::trace!("all candidates of {x} are taken");
                    return false;
                }
                pruned |= cx.len() < before;
            }
        }
        if !pruned {
            return true;
        }
        *changed = true;
    }
}

fn is_injective(mapping: &BlankMapping) -> bool {
    mapping.values().collect::<HashSet<_>>().len() == mapping.len()
}

/// Blank node pairs bound while unifying two triples.
#[derive(Default)]
struct Assignment<'a> {
    pairs: Vec<(&'a BlankNode, &'a BlankNode)>,
}

impl<'a> Assignment<'a> {
    fn bind(&mut self, x: &'a BlankNode, y: &'a BlankNode) -> bool {
        for (x0, y0) in &self.pairs {
            if *x0 == x || *y0 == y {
                return *x0 == x && *y0 == y;
            }
        }
        self.pairs.push((x, y));
        true
    }
}

fn unify_triples<'a>(
    t1: &'a Triple,
    t2: &'a Triple,
    assignment: &mut Assignment<'a>,
    candidates: &Candidates,
) -> bool {
    t1.spo()
        .into_iter()
        .zip(t2.spo())
        .all(|(n1, n2)| unify_nodes(n1, n2, assignment, candidates))
}

fn unify_nodes<'a>(
    n1: &'a Node,
    n2: &'a Node,
    assignment: &mut Assignment<'a>,
    candidates: &Candidates,
) -> bool {
    match (n1, n2) {
        (Node::Blank(x), Node::Blank(y)) => {
            candidates.get(x).is_some_and(|cx| cx.contains(y)) && assignment.bind(x, y)
        }
        (Node::Triple(t1), Node::Triple(t2)) if !t1.is_ground() => {
            unify_triples(t1, t2, assignment, candidates)
        }
        _ => n1 == n2,
    }
}
