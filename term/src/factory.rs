//! I define [`NodeFactory`], which builds validated nodes
//! and mints blank nodes within its own scope.
use crate::{
    BlankNode, BnodeId, Iri, LanguageTag, Literal, Node, Result, ScopeId, Triple, ValidationMode,
    VarName,
};
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

static NEXT_SCOPE: AtomicU64 = AtomicU64::new(1);

/// Builds nodes, checking their constituents according to a [`ValidationMode`].
///
/// Every factory owns a fresh [`ScopeId`]:
/// blank nodes minted by different factories are never equal,
/// even if they have the same local identifier.
///
/// A clone shares the scope of the original factory, and also its record of used labels,
/// so that fresh blank nodes minted by either of them never collide.
#[derive(Clone, Debug)]
pub struct NodeFactory {
    scope: ScopeId,
    validation: ValidationMode,
    labels: Arc<Mutex<Labels>>,
}

/// The blank node labels used in a scope.
#[derive(Debug, Default)]
struct Labels {
    next_bnode: u64,
    used: HashSet<BnodeId>,
}

impl NodeFactory {
    /// A new factory with a fresh scope and the default validation mode.
    pub fn new() -> Self {
        Self::with_validation(ValidationMode::default())
    }

    /// A new factory with a fresh scope and the given validation mode.
    pub fn with_validation(validation: ValidationMode) -> Self {
        NodeFactory {
            scope: ScopeId(NEXT_SCOPE.fetch_add(1, Ordering::Relaxed)),
            validation,
            labels: Arc::default(),
        }
    }

    /// The blank node scope of this factory.
    pub fn scope(&self) -> ScopeId {
        self.scope
    }

    /// The validation mode of this factory.
    pub fn validation(&self) -> ValidationMode {
        self.validation
    }

    /// Mint a fresh blank node (`b1`, `b2`, ...).
    ///
    /// The minted identifier never collides with one previously passed to
    /// [`NodeFactory::blank_with_id`].
    pub fn blank(&mut self) -> Node {
        let mut labels = self.labels();
        loop {
            labels.next_bnode += 1;
            let id = BnodeId::new_unchecked(format!("b{}", labels.next_bnode));
            if labels.used.insert(id.clone()) {
                return BlankNode::new(self.scope, id).into();
            }
        }
    }

    /// The blank node labelled `id` in the scope of this factory.
    ///
    /// Calling this method twice with the same `id` returns equal nodes.
    pub fn blank_with_id<T: Into<Arc<str>>>(&mut self, id: T) -> Result<Node> {
        let id = BnodeId::new(id)?;
        self.labels().used.insert(id.clone());
        Ok(BlankNode::new(self.scope, id).into())
    }

    fn labels(&self) -> MutexGuard<'_, Labels> {
        self.labels.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// An IRI node.
    pub fn iri<T: Into<Arc<str>>>(&self, iri: T) -> Result<Node> {
        self.make_iri(iri).map(Node::Iri)
    }

    /// A literal node with the given datatype.
    pub fn literal_dt<T, U>(&self, lexical: T, datatype: U) -> Result<Node>
    where
        T: Into<Arc<str>>,
        U: Into<Arc<str>>,
    {
        let datatype = self.make_iri(datatype)?;
        Ok(Literal::new_dt(lexical, datatype).into())
    }

    /// A language-tagged string node.
    pub fn literal_lang<T, U>(&self, lexical: T, tag: U) -> Result<Node>
    where
        T: Into<Arc<str>>,
        U: Into<Arc<str>>,
    {
        let tag = match self.validation {
            ValidationMode::None => LanguageTag::new_unchecked(tag),
            ValidationMode::WellFormed => LanguageTag::new(tag)?,
            ValidationMode::Turtle => LanguageTag::new_turtle(tag)?,
        };
        Ok(Literal::new_lang(lexical, tag).into())
    }

    /// A simple literal node (of datatype `xsd:string`).
    pub fn literal<T: Into<Arc<str>>>(&self, lexical: T) -> Node {
        Literal::new_simple(lexical).into()
    }

    /// A quoted triple node.
    pub fn triple(&self, s: Node, p: Node, o: Node) -> Node {
        Triple::new(s, p, o).into()
    }

    /// A variable node.
    pub fn variable<T: Into<Arc<str>>>(&self, name: T) -> Result<Node> {
        Ok(VarName::new(name)?.into())
    }

    fn make_iri<T: Into<Arc<str>>>(&self, iri: T) -> Result<Iri> {
        match self.validation {
            ValidationMode::None => Ok(Iri::new_unchecked(iri)),
            ValidationMode::WellFormed | ValidationMode::Turtle => Iri::new(iri),
        }
    }
}

impl Default for NodeFactory {
    fn default() -> Self {
        Self::new()
    }
}
