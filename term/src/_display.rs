//! `Display` renders nodes and triples in an N-Triples-like syntax
//! (with `<< >>` for quoted triples and `?` for variables).
//!
//! This is meant for logging and debugging, not as a serializer:
//! the scope of blank nodes is not rendered.
use crate::ns::xsd;
use crate::{BlankNode, Literal, Node, Quad, Triple};
use std::fmt;

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Iri(iri) => write!(f, "<{iri}>"),
            Node::Blank(b) => b.fmt(f),
            Node::Literal(lit) => lit.fmt(f),
            Node::Triple(t) => write!(f, "<< {} {} {} >>", t.s(), t.p(), t.o()),
            Node::Variable(v) => write!(f, "?{v}"),
        }
    }
}

impl fmt::Display for BlankNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_:{}", self.id())
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        for c in self.lexical().chars() {
            match c {
                '"' => f.write_str("\\\"")?,
                '\\' => f.write_str("\\\\")?,
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                _ => write!(f, "{c}")?,
            }
        }
        f.write_str("\"")?;
        if let Some(tag) = self.language() {
            write!(f, "@{tag}")
        } else if self.datatype() != xsd::string {
            write!(f, "^^<{}>", self.datatype())
        } else {
            Ok(())
        }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.s(), self.p(), self.o())
    }
}

impl fmt::Display for Quad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.triple();
        match self.graph() {
            None => t.fmt(f),
            Some(g) => write!(f, "{} {} {} {g} .", t.s(), t.p(), t.o()),
        }
    }
}
