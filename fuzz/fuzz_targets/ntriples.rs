#![no_main]
use libfuzzer_sys::fuzz_target;
use rill_api::model::Statement;
use rill_api::parser::StatementHandler;
use rill_ntriples::{FatalError, LineParser};

struct Ignore;

impl StatementHandler for Ignore {
    type Error = FatalError;

    fn on_statement(&mut self, _: Statement<'_>) -> Result<(), FatalError> {
        Ok(())
    }
}

fuzz_target!(|data: &[u8]| {
    // the first byte picks the chunk size, to shake the line reassembly
    let (chunk_size, data) = match data.split_first() {
        Some((first, rest)) => (usize::from(*first).max(1), rest),
        None => (1, data),
    };
    let mut parser = LineParser::ntriples();
    for chunk in data.chunks(chunk_size) {
        if parser.feed(chunk, false, &mut Ignore).is_err() {
            return;
        }
    }
    let _ = parser.finish(&mut Ignore);
});
