//! Interfaces for RDF formatters.

use crate::model::Statement;
use std::error::Error;

/// A formatter for [`Statement`](../model/struct.Statement.html).
pub trait StatementFormatter {
    type Error: Error;

    /// Writes a statement
    fn format(&mut self, statement: &Statement<'_>) -> Result<(), Self::Error>;
}
