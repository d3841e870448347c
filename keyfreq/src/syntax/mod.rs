//! Syntax analysis: validates the record grammar and accumulates totals
//!
//! The parser pulls lexemes from the tokenizer one at a time; there is no
//! intermediate token list or tree.

mod error;
mod parser;

pub use error::{SyntaxError, SyntaxResult};
pub use parser::{FrequencyParser, ParseOutcome, ParseStats};

use crate::logging::codes;
use crate::{log_debug, log_success};
use std::io::{BufReader, Read};

/// Parse a complete keyfreq document from `reader`
pub fn parse_usage<R: Read>(reader: R) -> SyntaxResult<ParseOutcome> {
    log_debug!("Starting syntax analysis");

    let mut parser = FrequencyParser::new(BufReader::new(reader));

    match parser.parse_root() {
        Ok(()) => {
            let outcome = parser.finish();
            log_success!(codes::success::PARSE_COMPLETE, "Syntax analysis completed",
                "records" => outcome.stats.records,
                "lexemes" => outcome.stats.lexemes,
                "modes" => outcome.tables.modes().len(),
                "functions" => outcome.tables.functions().len()
            );
            Ok(outcome)
        }
        Err(error) => {
            // Reported to the user by the caller; keep the detail for debugging.
            log_debug!("Syntax analysis failed",
                "code" => error.error_code(),
                "position" => error.position(),
                "records_before_error" => parser.stats().records
            );
            Err(error)
        }
    }
}

/// [`parse_usage`] over an in-memory string
pub fn parse_str(input: &str) -> SyntaxResult<ParseOutcome> {
    parse_usage(input.as_bytes())
}
