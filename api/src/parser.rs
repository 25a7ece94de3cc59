//! Interfaces between incremental RDF parsers and the code consuming their output.

use crate::model::{NamedOrBlankNode, Statement};
use std::error::Error;
use std::fmt;

/// A position in the parsed byte stream, used for diagnostics.
///
/// `line` starts at 1, `column` is the 0-based byte offset inside the line
/// and `byte` the 0-based byte offset from the beginning of the stream.
/// A `\r\n` pair is a single line break spanning two bytes.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub struct Locator {
    pub line: u64,
    pub column: u64,
    pub byte: u64,
}

impl Locator {
    /// The position of the first byte of a stream.
    pub const START: Self = Self {
        line: 1,
        column: 0,
        byte: 0,
    };

    /// Moves forward by `count` bytes on the same line.
    pub fn advance(&mut self, count: usize) {
        let count = count as u64;
        self.column += count;
        self.byte += count;
    }

    /// Moves past a line break made of `terminator_len` bytes.
    pub fn next_line(&mut self, terminator_len: usize) {
        self.line += 1;
        self.column = 0;
        self.byte += terminator_len as u64;
    }

    /// Moves forward over `bytes`, counting the line breaks they contain.
    pub fn advance_over(&mut self, bytes: &[u8]) {
        let mut previous = None;
        for &c in bytes {
            match c {
                b'\n' if previous == Some(b'\r') => self.byte += 1,
                b'\n' | b'\r' => self.next_line(1),
                _ => self.advance(1),
            }
            previous = Some(c);
        }
    }

    /// The position `offset` bytes further on the same line.
    pub fn shifted(mut self, offset: usize) -> Self {
        self.advance(offset);
        self
    }
}

impl Default for Locator {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {} column {} (byte {})",
            self.line, self.column, self.byte
        )
    }
}

/// A located message reported by a parser: a recoverable error or a warning.
pub trait Diagnostic: Error {
    /// Where the problem was found.
    fn locator(&self) -> Locator;
}

/// Receives the output of a parser.
///
/// Every method may return an error: the parser then stops and returns it to its caller.
/// This is how an application turns recoverable errors into fatal ones.
///
/// The statements only borrow the parser buffers: they cannot outlive the callback.
///
/// ```
/// use rill_api::model::{NamedNode, Statement};
/// use rill_api::parser::StatementHandler;
///
/// #[derive(Default)]
/// struct Counter {
///     statements: usize,
/// }
///
/// impl StatementHandler for Counter {
///     type Error = std::io::Error;
///
///     fn on_statement(&mut self, _: Statement<'_>) -> Result<(), Self::Error> {
///         self.statements += 1;
///         Ok(())
///     }
/// }
///
/// let node = NamedNode { iri: "http://example.com/" };
/// let mut counter = Counter::default();
/// counter.on_statement(Statement {
///     subject: node.into(),
///     predicate: node,
///     object: node.into(),
///     graph_name: None,
/// })?;
/// assert_eq!(1, counter.statements);
/// # std::io::Result::Ok(())
/// ```
pub trait StatementHandler {
    type Error;

    /// Called once for each successfully parsed statement, in stream order.
    fn on_statement(&mut self, statement: Statement<'_>) -> Result<(), Self::Error>;

    /// Called before the first statement of a graph.
    ///
    /// `None` is the default graph.
    fn on_graph_start(
        &mut self,
        graph_name: Option<NamedOrBlankNode<'_>>,
    ) -> Result<(), Self::Error> {
        let _ = graph_name;
        Ok(())
    }

    /// Called once the last statement of a graph has been emitted.
    fn on_graph_end(
        &mut self,
        graph_name: Option<NamedOrBlankNode<'_>>,
    ) -> Result<(), Self::Error> {
        let _ = graph_name;
        Ok(())
    }

    /// Called when a statement has been dropped because of a syntax error.
    ///
    /// By default the error is logged and parsing goes on with the next statement.
    fn on_error(&mut self, error: &dyn Diagnostic) -> Result<(), Self::Error> {
        log::error!("{}", error);
        Ok(())
    }

    /// Called for suspicious input that did not prevent emitting a statement.
    fn on_warning(&mut self, warning: &dyn Diagnostic) -> Result<(), Self::Error> {
        log::warn!("{}", warning);
        Ok(())
    }
}

impl<H: StatementHandler + ?Sized> StatementHandler for &mut H {
    type Error = H::Error;

    fn on_statement(&mut self, statement: Statement<'_>) -> Result<(), Self::Error> {
        (**self).on_statement(statement)
    }

    fn on_graph_start(
        &mut self,
        graph_name: Option<NamedOrBlankNode<'_>>,
    ) -> Result<(), Self::Error> {
        (**self).on_graph_start(graph_name)
    }

    fn on_graph_end(
        &mut self,
        graph_name: Option<NamedOrBlankNode<'_>>,
    ) -> Result<(), Self::Error> {
        (**self).on_graph_end(graph_name)
    }

    fn on_error(&mut self, error: &dyn Diagnostic) -> Result<(), Self::Error> {
        (**self).on_error(error)
    }

    fn on_warning(&mut self, warning: &dyn Diagnostic) -> Result<(), Self::Error> {
        (**self).on_warning(warning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locator_line_breaks_reset_column() {
        let mut locator = Locator::START;
        locator.advance(5);
        locator.next_line(2);
        assert_eq!(
            Locator {
                line: 2,
                column: 0,
                byte: 7
            },
            locator
        );
        assert_eq!(3, locator.shifted(3).column);
    }

    #[test]
    fn locator_advances_over_embedded_line_breaks() {
        let mut locator = Locator::START;
        locator.advance_over(b"ab\r\ncd\ne\rfg");
        assert_eq!(
            Locator {
                line: 4,
                column: 2,
                byte: 13
            },
            locator
        );
    }
}
