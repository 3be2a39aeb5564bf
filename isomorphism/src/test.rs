use super::*;
use std::error::Error;
use trigon_inmem::graph::Graph;
use trigon_inmem::TripleCollection;
use trigon_term::{LiteralEqualityMode, Node, Triple};

const FOAF_KNOWS: &str = "http://xmlns.com/foaf/0.1/knows";
const FOAF_MBOX: &str = "http://xmlns.com/foaf/0.1/mbox";
const FOAF_NAME: &str = "http://xmlns.com/foaf/0.1/name";
const MBOX_ALICE: &str = "mailto:alice@work.example";
const LIT_ALICE: &str = "\"alice\"";
const LIT_BOB: &str = "\"bob\"";

type TestResult = Result<(), Box<dyn Error>>;

/// Build a node of `g` from a compact notation:
/// `_:x` for blank nodes, `"x"` for simple literals, IRIs otherwise.
fn node(g: &mut Graph, txt: &str) -> Result<Node, Box<dyn Error>> {
    Ok(if let Some(id) = txt.strip_prefix("_:") {
        g.create_blank_node_with_id(id)?
    } else if let Some(lex) = txt.strip_prefix('"') {
        g.factory().literal(lex.trim_end_matches('"'))
    } else {
        g.factory().iri(txt)?
    })
}

fn make_graph<S: AsRef<str>>(triples: &[[S; 3]]) -> Result<Graph, Box<dyn Error>> {
    let mut g = Graph::new();
    for [s, p, o] in triples {
        let s = node(&mut g, s.as_ref())?;
        let p = node(&mut g, p.as_ref())?;
        let o = node(&mut g, o.as_ref())?;
        g.assert(Triple::new(s, p, o))?;
    }
    Ok(g)
}

fn equal(g1: &Graph, g2: &Graph) -> Result<bool, MatchError> {
    let matcher = GraphMatcher::default();
    let ret = matcher.equals(g1, g2)?;
    assert_eq!(ret.is_some(), matcher.equals(g2, g1)?.is_some());
    Ok(ret.is_some())
}

/// Check that `mapping` is a bijection between the blank nodes of `g1` and `g2`,
/// turning every triple of `g1` into a triple of `g2`.
fn check_mapping(g1: &Graph, g2: &Graph, mapping: &BlankMapping) {
    assert_eq!(mapping.len(), g1.blank_nodes().len());
    let images: std::collections::HashSet<_> = mapping.values().collect();
    assert_eq!(images.len(), mapping.len());
    for t in g1.asserted() {
        let image = t.map_blank_nodes(&mut |b| Node::Blank(mapping[b].clone()));
        assert!(g2.contains(&image), "{image} not found");
    }
}

#[test]
fn no_bnode() -> TestResult {
    crate::test_setup();
    let make = |i1: &str, i2: &str| {
        make_graph(&[
            [i1, FOAF_NAME, LIT_ALICE],
            [i1, FOAF_MBOX, MBOX_ALICE],
            [i1, FOAF_KNOWS, i2],
            [i2, FOAF_NAME, LIT_BOB],
        ])
    };
    let g1 = make("http://example.org/alice", "http://example.org/bob")?;
    assert!(equal(&g1, &g1)?);
    let g1b = make("http://example.org/alice", "http://example.org/bob")?;
    assert!(equal(&g1, &g1b)?);

    let g2 = make("http://example.org/a", "http://example.org/b")?;
    assert!(!equal(&g1, &g2)?);

    let mut g3 = g1.clone();
    let t = g3.asserted().next().cloned().ok_or("empty graph")?;
    g3.retract(&t);
    assert!(!equal(&g1, &g3)?);
    Ok(())
}

#[test]
fn simple() -> TestResult {
    crate::test_setup();
    let make = |b1: &str, b2: &str, name2: &str| {
        make_graph(&[
            [b1, FOAF_NAME, LIT_ALICE],
            [b1, FOAF_MBOX, MBOX_ALICE],
            [b1, FOAF_KNOWS, b2],
            [b2, FOAF_NAME, name2],
        ])
    };
    let g1 = make("_:alice", "_:bob", LIT_BOB)?;
    let mapping = GraphMatcher::default().equals(&g1, &g1)?.ok_or("not equal")?;
    // nothing is ambiguous, so this is the identity
    assert!(mapping.iter().all(|(x, y)| x == y));

    let g2 = make("_:a", "_:b", LIT_BOB)?;
    let mapping = GraphMatcher::default().equals(&g1, &g2)?.ok_or("not equal")?;
    check_mapping(&g1, &g2, &mapping);
    assert!(mapping.keys().all(|b| b.scope() == g1.factory().scope()));
    assert!(mapping.values().all(|b| b.scope() == g2.factory().scope()));

    let g3 = make("_:a", "_:b", "\"bobby\"")?;
    assert!(!equal(&g1, &g3)?);

    // the same blank node in both places is not the same structure
    let g4 = make("_:a", "_:a", LIT_BOB)?;
    assert!(!equal(&g1, &g4)?);
    Ok(())
}

#[test]
fn quoted_triple() -> TestResult {
    crate::test_setup();
    let make = |b1: &str, b2: &str| -> Result<Graph, Box<dyn Error>> {
        let mut g = make_graph(&[[b1, FOAF_KNOWS, b2]])?;
        let (x, y) = (node(&mut g, b1)?, node(&mut g, b2)?);
        let knows = node(&mut g, FOAF_KNOWS)?;
        let since = node(&mut g, "http://example.org/since")?;
        let lit = g.factory().literal("2020");
        let quoted = g.factory().triple(x, knows, y.clone());
        g.assert(Triple::new(quoted, since, lit))?;
        let name = node(&mut g, FOAF_NAME)?;
        g.assert(Triple::new(y.clone(), name, y))?;
        Ok(g)
    };
    let g1 = make("_:a", "_:b")?;
    let g2 = make("_:x", "_:y")?;
    let mapping = GraphMatcher::default().equals(&g1, &g2)?.ok_or("not equal")?;
    check_mapping(&g1, &g2, &mapping);

    // the quoted triple has swapped blank nodes
    let mut g3 = make_graph(&[["_:x", FOAF_KNOWS, "_:y"], ["_:y", FOAF_NAME, "_:y"]])?;
    let (x, y) = (node(&mut g3, "_:x")?, node(&mut g3, "_:y")?);
    let knows = node(&mut g3, FOAF_KNOWS)?;
    let since = node(&mut g3, "http://example.org/since")?;
    let lit = g3.factory().literal("2020");
    let quoted = g3.factory().triple(y, knows, x);
    g3.assert(Triple::new(quoted, since, lit))?;
    assert!(!equal(&g1, &g3)?);
    Ok(())
}

fn make_chain(ids: &str) -> Vec<[String; 3]> {
    let nodes: Vec<String> = ids.chars().map(|c| format!("_:{c}")).collect();
    nodes
        .windows(2)
        .map(|w| [w[0].clone(), "tag:rel".to_string(), w[1].clone()])
        .collect()
}

#[test]
fn chain() -> TestResult {
    crate::test_setup();
    let g1 = make_graph(&make_chain("abcdefghij"))?;
    assert!(equal(&g1, &g1)?);
    let g2 = make_graph(&make_chain("EDCBAJIHGF"))?;
    assert!(equal(&g1, &g2)?);

    let g3 = make_graph(&make_chain("abcdefghijk"))?;
    assert!(!equal(&g1, &g3)?);
    Ok(())
}

#[test]
fn cycle2() -> TestResult {
    crate::test_setup();
    let g1 = make_graph(&make_chain("aba"))?;
    assert!(equal(&g1, &g1)?);
    let g2 = make_graph(&make_chain("BAB"))?;
    assert!(equal(&g1, &g2)?);
    Ok(())
}

#[test]
fn cycle_long() -> TestResult {
    crate::test_setup();
    let g1 = make_graph(&make_chain("abcdefghia"))?;
    assert!(equal(&g1, &g1)?);
    let g2 = make_graph(&make_chain("EBCDAIGHFE"))?;
    assert!(equal(&g1, &g2)?);

    let g3 = make_graph(&make_chain("abcdefghija"))?;
    assert!(!equal(&g1, &g3)?);
    Ok(())
}

#[test]
fn cycle_pathological() -> TestResult {
    crate::test_setup();
    // Both graphs have 7 blank nodes and 7 arcs,
    // and all blank nodes are locally indistinguishable:
    // each has exactly 1 incoming arc and 1 outgoing arc.
    // Refinement can not tell them apart, only the search can.
    let mut d1 = make_chain("abca");
    d1.append(&mut make_chain("defgd"));
    let g1 = make_graph(&d1)?;
    let g2 = make_graph(&make_chain("abcdefga"))?;
    assert!(!equal(&g1, &g2)?);

    let mut d3 = make_chain("ABCA");
    d3.append(&mut make_chain("GFEDG"));
    let g3 = make_graph(&d3)?;
    assert!(equal(&g1, &g3)?);
    Ok(())
}

#[test]
fn cycle_almost_pathological() -> TestResult {
    crate::test_setup();
    let mut d1 = make_chain("abca");
    d1.append(&mut make_chain("defgd"));
    d1.push(["_:a".into(), "tag:type".into(), "tag:Distinguished".into()]);
    let g1 = make_graph(&d1)?;

    let mut d2 = make_chain("abcdefga");
    d2.push(["_:a".into(), "tag:type".into(), "tag:Distinguished".into()]);
    let g2 = make_graph(&d2)?;
    assert!(!equal(&g1, &g2)?);
    Ok(())
}

fn make_clique(ids: &str) -> Vec<[String; 3]> {
    let mut triples = vec![];
    for n1 in ids.chars() {
        for n2 in ids.chars() {
            triples.push([format!("_:{n1}"), "tag:rel".into(), format!("_:{n2}")]);
        }
    }
    triples
}

#[test]
fn clique() -> TestResult {
    crate::test_setup();
    let g1 = make_graph(&make_clique("abcde"))?;
    assert!(equal(&g1, &g1)?);
    let g2 = make_graph(&make_clique("ABCDE"))?;
    assert!(equal(&g1, &g2)?);
    let mapping = GraphMatcher::default().equals(&g1, &g2)?.ok_or("not equal")?;
    check_mapping(&g1, &g2, &mapping);

    let g3 = make_graph(&make_clique("abcd"))?;
    assert!(!equal(&g1, &g3)?);
    Ok(())
}

fn make_tree(ids: &str) -> Vec<[String; 3]> {
    let nodes: Vec<String> = ids.chars().map(|c| format!("_:{c}")).collect();
    let mut triples = vec![];
    for i in 1..nodes.len() {
        triples.push([nodes[(i - 1) / 2].clone(), "tag:rel".into(), nodes[i].clone()]);
    }
    triples
}

#[test]
fn tree() -> TestResult {
    crate::test_setup();
    let g1 = make_graph(&make_tree("abcdefghij"))?;
    assert!(equal(&g1, &g1)?);
    let g2 = make_graph(&make_tree("ABCDEFGHIJ"))?;
    assert!(equal(&g1, &g2)?);

    let g3 = make_graph(&make_tree("abcdefghijk"))?;
    assert!(!equal(&g1, &g3)?);
    Ok(())
}

#[test]
fn blank_predicate_and_quoted_object() -> TestResult {
    crate::test_setup();
    let make = |ids: [&str; 3]| -> Result<Graph, Box<dyn Error>> {
        let mut g = Graph::new();
        let [b1, b2, b3] = ids.map(|id| g.create_blank_node_with_id(id));
        let (b1, b2, b3) = (b1?, b2?, b3?);
        let rel = g.factory().iri("tag:rel")?;
        g.assert(Triple::new(b1.clone(), rel.clone(), b2.clone()))?;
        let quoted = g.factory().triple(b2.clone(), b3.clone(), b1.clone());
        g.assert(Triple::new(b3.clone(), rel, quoted))?;
        Ok(g)
    };
    let g1 = make(["a", "b", "c"])?;
    let g2 = make(["z", "y", "x"])?;
    let mapping = GraphMatcher::default().equals(&g1, &g2)?.ok_or("not equal")?;
    check_mapping(&g1, &g2, &mapping);
    Ok(())
}

#[test]
fn reflexivity_and_symmetry() -> TestResult {
    crate::test_setup();
    let graphs = [
        make_graph(&make_chain("abcde"))?,
        make_graph(&make_chain("abcda"))?,
        make_graph(&make_clique("abc"))?,
        make_graph(&make_tree("abcde"))?,
        make_graph(&make_chain("EDCBA"))?,
        make_graph(&[["_:a", FOAF_NAME, LIT_ALICE], ["_:b", FOAF_NAME, LIT_BOB]])?,
        Graph::new(),
    ];
    let matcher = GraphMatcher::default();
    for g in &graphs {
        let mapping = matcher.equals(g, g)?.ok_or("not reflexive")?;
        check_mapping(g, g, &mapping);
        assert!(isomorphic(g, g));
    }
    for g1 in &graphs {
        for g2 in &graphs {
            assert_eq!(
                matcher.equals(g1, g2)?.is_some(),
                matcher.equals(g2, g1)?.is_some()
            );
        }
    }
    assert!(equal(&graphs[0], &graphs[4])?);
    Ok(())
}

#[test]
fn missing_graphs() -> TestResult {
    crate::test_setup();
    let g = make_graph(&make_chain("abc"))?;
    let matcher = GraphMatcher::default();
    assert_eq!(matcher.equals_opt::<Graph, Graph>(None, None)?, Some(BlankMapping::new()));
    assert_eq!(matcher.equals_opt(Some(&g), None::<&Graph>)?, None);
    assert_eq!(matcher.equals_opt(None::<&Graph>, Some(&g))?, None);
    assert!(matcher.equals_opt(Some(&g), Some(&g))?.is_some());

    let config = MatcherConfig::default();
    assert!(graphs_equal::<Graph, Graph>(None, None, config));
    assert!(!graphs_equal(Some(&g), None::<&Graph>, config));
    assert!(!graphs_equal(None::<&Graph>, Some(&g), config));
    Ok(())
}

fn make_foaf() -> Result<Graph, Box<dyn Error>> {
    make_graph(&[
        ["_:alice", FOAF_NAME, LIT_ALICE],
        ["_:alice", FOAF_MBOX, MBOX_ALICE],
        ["_:alice", FOAF_KNOWS, "_:bob"],
        ["_:bob", FOAF_NAME, LIT_BOB],
        ["_:bob", FOAF_KNOWS, "_:carol"],
        ["_:carol", FOAF_NAME, "\"carol\""],
    ])
}

#[test]
fn sub_graph_laws() -> TestResult {
    crate::test_setup();
    let mut g = make_foaf()?;
    let matcher = GraphMatcher::default();

    // triples about bob, copied from g
    let bob = node(&mut g, "_:bob")?;
    let mut h = Graph::new();
    h.assert_all(g.with_subject(&bob).cloned())?;
    assert_eq!(h.len(), 2);

    assert!(matcher.has_sub_graph(&g, &h)?.is_some());
    assert!(matcher.is_sub_graph_of(&h, &g)?.is_some());
    assert!(matcher.has_sub_graph(&h, &g)?.is_none());
    assert!(matcher.is_sub_graph_of(&g, &h)?.is_none());
    assert!(matcher.equals(&g, &h)?.is_none());

    // every graph is a sub-graph of itself
    assert!(matcher.is_sub_graph_of(&g, &g)?.is_some());
    assert!(matcher.is_sub_graph_of(&h, &h)?.is_some());
    Ok(())
}

#[test]
fn sub_graph_with_renaming() -> TestResult {
    crate::test_setup();
    let g = make_foaf()?;
    let matcher = GraphMatcher::default();

    let h = make_graph(&[["_:x", FOAF_NAME, LIT_ALICE], ["_:x", FOAF_KNOWS, "_:y"]])?;
    let mapping = matcher.is_sub_graph_of(&h, &g)?.ok_or("not a sub-graph")?;
    assert_eq!(mapping.len(), 2);
    for t in h.asserted() {
        let image = t.map_blank_nodes(&mut |b| Node::Blank(mapping[b].clone()));
        assert!(g.contains(&image));
    }

    // a chain of three acquaintances exists, but not a chain of four
    let h3 = make_graph(&make_chain_with(FOAF_KNOWS, "xyz"))?;
    assert!(matcher.is_sub_graph_of(&h3, &g)?.is_some());
    let h4 = make_graph(&make_chain_with(FOAF_KNOWS, "wxyz"))?;
    assert!(matcher.is_sub_graph_of(&h4, &g)?.is_none());

    // bob knows somebody, but carol does not
    let h5 = make_graph(&[["_:x", FOAF_NAME, "\"carol\""], ["_:x", FOAF_KNOWS, "_:y"]])?;
    assert!(matcher.is_sub_graph_of(&h5, &g)?.is_none());

    // acquaintance is not mutual
    let h6 = make_graph(&make_chain_with(FOAF_KNOWS, "xyx"))?;
    assert!(matcher.is_sub_graph_of(&h6, &g)?.is_none());
    Ok(())
}

fn make_chain_with(predicate: &str, ids: &str) -> Vec<[String; 3]> {
    make_chain(ids)
        .into_iter()
        .map(|[s, _, o]| [s, predicate.to_string(), o])
        .collect()
}

#[test]
fn loose_literals() -> TestResult {
    crate::test_setup();
    let make = |lex: &str, mode: LiteralEqualityMode| -> Result<Graph, Box<dyn Error>> {
        let mut g = Graph::with_mode(mode);
        let b = g.create_blank_node();
        let p = g.factory().iri("http://example.org/value")?;
        let lit = g.factory().literal_dt(lex, trigon_term::ns::xsd::integer)?;
        g.assert(Triple::new(b, p, lit))?;
        Ok(g)
    };
    let g1 = make("1", LiteralEqualityMode::Strict)?;
    let g2 = make("+01", LiteralEqualityMode::Strict)?;
    assert!(!isomorphic(&g1, &g2));

    let loose = GraphMatcher::new(MatcherConfig::default().with_mode(LiteralEqualityMode::Loose));
    assert!(loose.equals(&g1, &g2)?.is_some());

    let g3 = make("1", LiteralEqualityMode::Loose)?;
    assert!(isomorphic(&g3, &g2));
    Ok(())
}

#[test]
fn budget_exhaustion() -> TestResult {
    crate::test_setup();
    let g1 = make_graph(&make_clique("abcde"))?;
    let g2 = make_graph(&make_clique("vwxyz"))?;

    let tight = MatcherConfig::default().with_max_attempts(Some(1));
    assert_eq!(
        GraphMatcher::new(tight).equals(&g1, &g2),
        Err(MatchError::BudgetExhausted(1))
    );
    // fail closed
    assert!(!graphs_equal(Some(&g1), Some(&g2), tight));

    let unbounded = MatcherConfig::default().with_max_attempts(None);
    assert!(GraphMatcher::new(unbounded).equals(&g1, &g2)?.is_some());
    Ok(())
}

#[test]
fn brute_force_only() -> TestResult {
    crate::test_setup();
    // with a high enough limit, no blank node is pinned before enumerating
    let g1 = make_graph(&make_chain("abca"))?;
    let g2 = make_graph(&make_chain("xyzx"))?;
    let config = MatcherConfig::default().with_brute_force_limit(usize::MAX);
    let mapping = GraphMatcher::new(config).equals(&g1, &g2)?.ok_or("not equal")?;
    check_mapping(&g1, &g2, &mapping);

    // with no brute force at all, pinning must resolve everything
    let config = MatcherConfig::default().with_brute_force_limit(0);
    let mapping = GraphMatcher::new(config).equals(&g1, &g2)?.ok_or("not equal")?;
    check_mapping(&g1, &g2, &mapping);
    Ok(())
}

/// A hypercube of dimension `dim`, where node `i` is labelled `(i*k + c) mod 2^dim`
/// (`k` must be odd), with every arc in both directions,
/// and a second layer duplicating the sub-cube of dimension `dim-1` with another predicate.
fn make_hypercube(dim: u32, k: usize, c: usize) -> Result<Graph, Box<dyn Error>> {
    let n = 1_usize << dim;
    let mut g = Graph::new();
    let rel = g.factory().iri("tag:rel")?;
    let layer = g.factory().iri("tag:layer")?;
    let nodes = (0..n)
        .map(|i| g.create_blank_node_with_id(format!("n{}", (i * k + c) % n)))
        .collect::<Result<Vec<_>, _>>()?;
    for i in 0..n {
        for bit in 0..dim {
            let j = i ^ (1 << bit);
            g.assert(Triple::new(nodes[i].clone(), rel.clone(), nodes[j].clone()))?;
            if i < j && j < n / 2 {
                g.assert(Triple::new(nodes[i].clone(), layer.clone(), nodes[j].clone()))?;
            }
        }
    }
    Ok(g)
}

#[test]
fn hypercube() -> TestResult {
    crate::test_setup();
    let g1 = make_hypercube(4, 1, 0)?;
    let g2 = make_hypercube(4, 5, 3)?;
    let g3 = make_hypercube(4, 11, 7)?;
    assert_eq!(g1.len(), 16 * 4 + 8 * 3 / 2);
    let matcher = GraphMatcher::default();
    let mapping = matcher.equals(&g1, &g2)?.ok_or("not equal")?;
    check_mapping(&g1, &g2, &mapping);
    assert!(equal(&g2, &g3)?);
    Ok(())
}

#[test]
fn hypercube_with_moved_arc() -> TestResult {
    crate::test_setup();
    let g1 = make_hypercube(4, 5, 3)?;
    let mut g2 = make_hypercube(4, 1, 0)?;
    // replace the arc n0 -> n1 by an arc n0 -> n3, which is not an edge of the hypercube
    let rel = node(&mut g2, "tag:rel")?;
    let [n0, n1, n3] = ["_:n0", "_:n1", "_:n3"].map(|id| node(&mut g2, id));
    let (n0, n1, n3) = (n0?, n1?, n3?);
    assert!(g2.retract(&Triple::new(n0.clone(), rel.clone(), n1)));
    assert!(g2.assert(Triple::new(n0, rel, n3))?);
    assert_eq!(g1.len(), g2.len());
    assert!(!equal(&g1, &g2)?);
    Ok(())
}

#[test]
#[cfg_attr(not(feature = "all_tests"), ignore)]
fn hypercube_large() -> TestResult {
    crate::test_setup();
    let g1 = make_hypercube(7, 1, 0)?;
    let g2 = make_hypercube(7, 45, 77)?;
    assert!(equal(&g1, &g2)?);
    Ok(())
}
