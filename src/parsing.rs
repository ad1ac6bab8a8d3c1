use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;

use crate::error::{Error, Result};

#[derive(Parser)]
#[grammar = "listing.pest"]
struct ListingParser;

/// Decode a DAT listing back into bytes.
pub fn parse_dat<S: AsRef<str>>(input: S) -> Result<Vec<u8>> {
    parse_listing(Rule::dat, input.as_ref())
}

/// Decode an INC listing back into bytes.
///
/// Keywords are matched case-insensitively, blank lines are skipped.
pub fn parse_inc<S: AsRef<str>>(input: S) -> Result<Vec<u8>> {
    parse_listing(Rule::inc, input.as_ref())
}

fn parse_listing(rule: Rule, input: &str) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let pairs = ListingParser::parse(rule, input).map_err(|e| Error::Parse(e.to_string()))?;

    // Only tokens carry data, the rest is layout
    for pair in pairs.flatten() {
        if pair.as_rule() == Rule::hex {
            out.push(decode_token(&pair)?);
        }
    }

    log::trace!("decoded {} bytes from {:?} listing", out.len(), rule);
    Ok(out)
}

fn decode_token(pair: &Pair<'_, Rule>) -> Result<u8> {
    let token = pair.as_str();
    u8::from_str_radix(token, 16).map_err(|_| {
        let (line, col) = pair.as_span().start_pos().line_col();
        Error::Parse(format!(
            "token {:?} at {}:{} does not fit in a byte",
            token, line, col
        ))
    })
}
