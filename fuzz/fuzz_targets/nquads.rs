#![no_main]
use libfuzzer_sys::fuzz_target;
use rill_api::formatter::StatementFormatter;
use rill_api::model::Statement;
use rill_api::parser::StatementHandler;
use rill_ntriples::{FatalError, LineParser, NQuadsFormatter};

struct Reformat(NQuadsFormatter<Vec<u8>>);

impl StatementHandler for Reformat {
    type Error = FatalError;

    fn on_statement(&mut self, statement: Statement<'_>) -> Result<(), FatalError> {
        Ok(self.0.format(&statement)?)
    }
}

fuzz_target!(|data: &[u8]| {
    let mut first = Reformat(NQuadsFormatter::new(Vec::new()));
    if LineParser::nquads().parse_read(data, &mut first).is_err() {
        return;
    }
    let serialized = first.0.finish();

    // what we write must parse back to the same statements
    let mut second = Reformat(NQuadsFormatter::new(Vec::new()));
    LineParser::nquads()
        .parse_read_with_chunk_size(serialized.as_slice(), 7, &mut second)
        .unwrap();
    assert_eq!(serialized, second.0.finish());
});
