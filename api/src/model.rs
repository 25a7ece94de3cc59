//! Data structures for [RDF 1.1 Concepts](https://www.w3.org/TR/rdf11-concepts/) like IRI, literal or statements.
//!
//! All the types borrow their strings: the parsers hand them out for the duration of a
//! callback and reuse the underlying buffers for the next line.

use std::fmt;
use std::fmt::Write;

/// The IRI prefix of the `rdf:_1`, `rdf:_2`... container membership properties.
pub const RDF_ORDINAL_PREFIX: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#_";

/// An RDF [IRI](https://www.w3.org/TR/rdf11-concepts/#dfn-iri).
///
/// The default string formatter is returning an N-Triples compatible representation.
///
/// ```
/// use rill_api::model::NamedNode;
///
/// assert_eq!(
///     "<http://example.com/foo>",
///     NamedNode { iri: "http://example.com/foo" }.to_string()
/// )
/// ```
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Clone, Copy, Hash)]
pub struct NamedNode<'a> {
    /// The [IRI](https://www.w3.org/TR/rdf11-concepts/#dfn-iri) itself.
    pub iri: &'a str,
}

impl<'a> NamedNode<'a> {
    /// Returns the `N` of a `rdf:_N` container membership IRI.
    ///
    /// `Some(None)` means the IRI has the `rdf:_` prefix but `N` is not a positive integer.
    ///
    /// ```
    /// use rill_api::model::NamedNode;
    ///
    /// let third = NamedNode { iri: "http://www.w3.org/1999/02/22-rdf-syntax-ns#_3" };
    /// assert_eq!(Some(Some(3)), third.ordinal());
    /// let zero = NamedNode { iri: "http://www.w3.org/1999/02/22-rdf-syntax-ns#_0" };
    /// assert_eq!(Some(None), zero.ordinal());
    /// assert_eq!(None, NamedNode { iri: "http://schema.org/name" }.ordinal());
    /// ```
    pub fn ordinal(&self) -> Option<Option<u64>> {
        let digits = self.iri.strip_prefix(RDF_ORDINAL_PREFIX)?;
        if digits.is_empty() || !digits.bytes().all(|c| c.is_ascii_digit()) {
            return Some(None);
        }
        Some(digits.parse::<u64>().ok().filter(|n| *n > 0))
    }
}

impl<'a> fmt::Display for NamedNode<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('<')?;
        write_escaped_iri(f, self.iri)?;
        f.write_char('>')
    }
}

/// An RDF [blank node](https://www.w3.org/TR/rdf11-concepts/#dfn-blank-node).
///
/// Identifiers are scoped to one parsing session.
///
/// ```
/// use rill_api::model::BlankNode;
///
/// assert_eq!(
///     "_:a1",
///     BlankNode { id: "a1" }.to_string()
/// )
/// ```
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub struct BlankNode<'a> {
    /// The [blank node identifier](https://www.w3.org/TR/rdf11-concepts/#dfn-blank-node-identifier).
    pub id: &'a str,
}

impl<'a> fmt::Display for BlankNode<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_:{}", self.id)
    }
}

/// An RDF [literal](https://www.w3.org/TR/rdf11-concepts/#dfn-literal).
///
/// A literal carries either a language tag or a datatype, never both.
/// The language tags are lowercased by the parsers [as suggested by the RDF specification](https://www.w3.org/TR/rdf11-concepts/#dfn-language-tagged-string).
///
/// ```
/// use rill_api::model::NamedNode;
/// use rill_api::model::Literal;
///
/// assert_eq!(
///     "\"foo\\nbar\"",
///     Literal::Simple { value: "foo\nbar" }.to_string()
/// );
///
/// assert_eq!(
///     "\"1999-01-01\"^^<http://www.w3.org/2001/XMLSchema#date>",
///     Literal::Typed { value: "1999-01-01", datatype: NamedNode {iri: "http://www.w3.org/2001/XMLSchema#date" }}.to_string()
/// );
///
/// assert_eq!(
///     "\"foo\"@en",
///     Literal::LanguageTaggedString { value: "foo", language: "en" }.to_string()
/// );
/// ```
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum Literal<'a> {
    /// A [simple literal](https://www.w3.org/TR/rdf11-concepts/#dfn-simple-literal) without datatype or language form.
    Simple {
        /// The [lexical form](https://www.w3.org/TR/rdf11-concepts/#dfn-lexical-form).
        value: &'a str,
    },
    /// A [language-tagged string](https://www.w3.org/TR/rdf11-concepts/#dfn-language-tagged-string)
    LanguageTaggedString {
        /// The [lexical form](https://www.w3.org/TR/rdf11-concepts/#dfn-lexical-form).
        value: &'a str,
        /// The [language tag](https://www.w3.org/TR/rdf11-concepts/#dfn-language-tag).
        language: &'a str,
    },
    /// A literal with an explicit datatype
    Typed {
        /// The [lexical form](https://www.w3.org/TR/rdf11-concepts/#dfn-lexical-form).
        value: &'a str,
        /// The [datatype IRI](https://www.w3.org/TR/rdf11-concepts/#dfn-datatype-iri).
        datatype: NamedNode<'a>,
    },
}

impl<'a> Literal<'a> {
    /// The [lexical form](https://www.w3.org/TR/rdf11-concepts/#dfn-lexical-form) of the literal.
    pub fn value(&self) -> &'a str {
        match self {
            Literal::Simple { value }
            | Literal::LanguageTaggedString { value, .. }
            | Literal::Typed { value, .. } => *value,
        }
    }
}

impl<'a> fmt::Display for Literal<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('"')?;
        write_escaped_literal(f, self.value())?;
        f.write_char('"')?;
        match self {
            Literal::Simple { .. } => Ok(()),
            Literal::LanguageTaggedString { language, .. } => write!(f, "@{}", language),
            Literal::Typed { datatype, .. } => write!(f, "^^{}", datatype),
        }
    }
}

/// The union of [IRIs](https://www.w3.org/TR/rdf11-concepts/#dfn-iri) and [blank nodes](https://www.w3.org/TR/rdf11-concepts/#dfn-blank-node).
///
/// It is the type of statement subjects and graph names.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum NamedOrBlankNode<'a> {
    NamedNode(NamedNode<'a>),
    BlankNode(BlankNode<'a>),
}

impl<'a> fmt::Display for NamedOrBlankNode<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamedOrBlankNode::NamedNode(node) => node.fmt(f),
            NamedOrBlankNode::BlankNode(node) => node.fmt(f),
        }
    }
}

impl<'a> From<NamedNode<'a>> for NamedOrBlankNode<'a> {
    fn from(node: NamedNode<'a>) -> Self {
        NamedOrBlankNode::NamedNode(node)
    }
}

impl<'a> From<BlankNode<'a>> for NamedOrBlankNode<'a> {
    fn from(node: BlankNode<'a>) -> Self {
        NamedOrBlankNode::BlankNode(node)
    }
}

/// An RDF [term](https://www.w3.org/TR/rdf11-concepts/#dfn-rdf-term).
///
/// It is the union of [IRIs](https://www.w3.org/TR/rdf11-concepts/#dfn-iri), [blank nodes](https://www.w3.org/TR/rdf11-concepts/#dfn-blank-node) and [literals](https://www.w3.org/TR/rdf11-concepts/#dfn-literal).
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum Term<'a> {
    NamedNode(NamedNode<'a>),
    BlankNode(BlankNode<'a>),
    Literal(Literal<'a>),
}

impl<'a> fmt::Display for Term<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::NamedNode(node) => node.fmt(f),
            Term::BlankNode(node) => node.fmt(f),
            Term::Literal(literal) => literal.fmt(f),
        }
    }
}

impl<'a> From<NamedNode<'a>> for Term<'a> {
    fn from(node: NamedNode<'a>) -> Self {
        Term::NamedNode(node)
    }
}

impl<'a> From<BlankNode<'a>> for Term<'a> {
    fn from(node: BlankNode<'a>) -> Self {
        Term::BlankNode(node)
    }
}

impl<'a> From<Literal<'a>> for Term<'a> {
    fn from(literal: Literal<'a>) -> Self {
        Term::Literal(literal)
    }
}

impl<'a> From<NamedOrBlankNode<'a>> for Term<'a> {
    fn from(resource: NamedOrBlankNode<'a>) -> Self {
        match resource {
            NamedOrBlankNode::NamedNode(node) => Term::NamedNode(node),
            NamedOrBlankNode::BlankNode(node) => Term::BlankNode(node),
        }
    }
}

/// An RDF statement: a [triple](https://www.w3.org/TR/rdf11-concepts/#dfn-rdf-triple), optionally
/// placed in a named graph of an [RDF dataset](https://www.w3.org/TR/rdf11-concepts/#dfn-rdf-dataset).
///
/// The positional constraints of N-Triples and N-Quads are carried by the field types:
/// the predicate is always an IRI, the subject and the graph name are never literals.
///
/// The default string formatter is returning a N-Quads representation
/// (which is N-Triples when there is no graph name).
///
/// ```
/// use rill_api::model::NamedNode;
/// use rill_api::model::Statement;
///
/// assert_eq!(
///     "<http://example.com/foo> <http://schema.org/sameAs> <http://example.com/foo> <http://example.com/> .",
///     Statement {
///         subject: NamedNode { iri: "http://example.com/foo" }.into(),
///         predicate: NamedNode { iri: "http://schema.org/sameAs" },
///         object: NamedNode { iri: "http://example.com/foo" }.into(),
///         graph_name: Some(NamedNode { iri: "http://example.com/" }.into()),
///     }.to_string()
/// )
/// ```
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub struct Statement<'a> {
    pub subject: NamedOrBlankNode<'a>,
    pub predicate: NamedNode<'a>,
    pub object: Term<'a>,
    pub graph_name: Option<NamedOrBlankNode<'a>>,
}

impl<'a> Statement<'a> {
    /// The same statement without its graph name.
    pub fn in_default_graph(self) -> Self {
        Self {
            graph_name: None,
            ..self
        }
    }
}

impl<'a> fmt::Display for Statement<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.subject, self.predicate, self.object)?;
        if let Some(graph_name) = self.graph_name {
            write!(f, " {}", graph_name)?;
        }
        f.write_str(" .")
    }
}

// ECHAR for the four characters canonical N-Triples escapes, UCHAR for the other controls.
fn write_escaped_literal(f: &mut impl Write, value: &str) -> fmt::Result {
    for c in value.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\0'..='\x1F' | '\x7F' => write!(f, "\\u{:04X}", u32::from(c))?,
            c => f.write_char(c)?,
        }
    }
    Ok(())
}

// IRIREF forbids these raw, UCHAR is the only escape it allows.
fn write_escaped_iri(f: &mut impl Write, iri: &str) -> fmt::Result {
    for c in iri.chars() {
        match c {
            '\0'..=' ' | '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\' => {
                write!(f, "\\u{:04X}", u32::from(c))?
            }
            c => f.write_char(c)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_control_characters_are_escaped() {
        assert_eq!(
            "\"a\\u0009b\\\"c\\\\\"",
            Literal::Simple { value: "a\tb\"c\\" }.to_string()
        );
    }

    #[test]
    fn iri_forbidden_characters_are_escaped() {
        assert_eq!(
            "<http://example.com/a\\u0020b>",
            NamedNode {
                iri: "http://example.com/a b"
            }
            .to_string()
        );
    }

    #[test]
    fn statement_without_graph_is_a_triple_line() {
        let statement = Statement {
            subject: BlankNode { id: "b1" }.into(),
            predicate: NamedNode {
                iri: "http://example.com/p",
            },
            object: Literal::LanguageTaggedString {
                value: "v",
                language: "en",
            }
            .into(),
            graph_name: Some(BlankNode { id: "g" }.into()),
        };
        assert_eq!(
            "_:b1 <http://example.com/p> \"v\"@en .",
            statement.in_default_graph().to_string()
        );
    }

    #[test]
    fn ordinal_requires_positive_digits() {
        assert_eq!(
            Some(None),
            NamedNode {
                iri: "http://www.w3.org/1999/02/22-rdf-syntax-ns#_x"
            }
            .ordinal()
        );
        assert_eq!(
            Some(Some(12)),
            NamedNode {
                iri: "http://www.w3.org/1999/02/22-rdf-syntax-ns#_12"
            }
            .ordinal()
        );
    }
}
