//! Parser tests.
//!
//! - `parser`: statements and each expression production
//! - `precedence`: operator binding, checked through the rendered tree
//! - `errors`: diagnostics and recovery after malformed input
//! - `registry`: handler registration

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod errors;
mod registry;

use monkey_ir::Program;

use crate::parse;

/// Parse `source`, failing the test on any diagnostic.
fn parse_ok(source: &str) -> Program {
    let output = parse(source);
    assert!(
        !output.has_errors(),
        "unexpected diagnostics for {source:?}: {:?}",
        output.errors
    );
    output.program
}
