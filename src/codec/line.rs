//! Single-line record codec
//!
//! `<id> <dept> <name> <salary> <by>.<bm>.<bd> <ey>.<em>.<ed>`

use crate::error::{Result, RosterError};
use crate::record::{Date, Record};

/// Whitespace-separated tokens on a well-formed line
pub const TOKENS_PER_LINE: usize = 6;

/// Encode a record as one line of the data file (no trailing newline)
pub fn encode_record(record: &Record) -> String {
    record.to_string()
}

/// Decode one line of the data file
///
/// The line must hold exactly six tokens: two integers, two text tokens and
/// two `y.m.d` dates, in file order. Leading and trailing whitespace
/// (including a `\r` left over from CRLF files) is ignored.
pub fn decode_record(line: &str) -> Result<Record> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != TOKENS_PER_LINE {
        return Err(RosterError::Parse(format!(
            "expected {} tokens, got {}",
            TOKENS_PER_LINE,
            tokens.len()
        )));
    }

    let id = parse_int("id", tokens[0])?;
    let dept = tokens[1].to_string();
    let name = tokens[2].to_string();
    let salary = parse_int("salary", tokens[3])?;
    let begin: Date = tokens[4].parse()?;
    let end: Date = tokens[5].parse()?;

    Ok(Record {
        id,
        dept,
        name,
        salary,
        begin,
        end,
    })
}

fn parse_int(field: &str, token: &str) -> Result<i32> {
    token
        .parse::<i32>()
        .map_err(|e| RosterError::Parse(format!("{} {:?}: {}", field, token, e)))
}
