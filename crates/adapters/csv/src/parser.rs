//! Price list CSV parser.
//!
//! Pure functions operating on raw text — no IO. The format is CSV with a
//! header row followed by data rows carrying six logical columns in fixed
//! order: code, category, service, price, aasandha, patient. Fields may be
//! double-quoted; quoted fields may contain commas; escaped quotes inside a
//! quoted field are not supported.
//!
//! Two long-standing quirks of the format handling are contract and must
//! not be "fixed":
//!
//! - An empty field between two commas produces no token at all, so the
//!   remaining fields of that row shift left by one position.
//! - Cleaning removes every double-quote character in a token, wherever it
//!   appears, then trims surrounding whitespace.

use pricelist_domain::record::ServiceRecord;

/// Parse the raw text of the price resource into an ordered record
/// sequence.
///
/// Blank and whitespace-only lines are discarded (including a trailing
/// newline). The first remaining line is treated as the header and dropped
/// without validating column names. Parsing never fails: a row with fewer
/// than six tokens fills the missing fields with empty strings, and extra
/// tokens are ignored.
#[must_use]
pub fn parse_price_list(text: &str) -> Vec<ServiceRecord> {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());
    let _header = lines.next();
    lines.map(parse_row).collect()
}

/// Map one data line onto a record, positionally.
fn parse_row(line: &str) -> ServiceRecord {
    let tokens = tokenize(line);
    let field = |idx: usize| tokens.get(idx).map_or_else(String::new, |raw| clean(raw));

    ServiceRecord {
        code: field(0),
        category: field(1),
        service: field(2),
        price: field(3),
        aasandha: field(4),
        patient: field(5),
    }
}

/// Split a row into raw tokens.
///
/// A token is either a double-quoted span whose closing quote is followed
/// by optional whitespace and a comma or end of line, or a non-empty run of
/// non-comma characters. A field starting with a quote that never closes
/// that way degrades to a plain non-comma run.
fn tokenize(line: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < line.len() {
        let rest = &line[pos..];
        if rest.starts_with(',') {
            // Empty field: no token, later fields shift left.
            pos += 1;
            continue;
        }
        if rest.starts_with('"') {
            if let Some(end) = quoted_span_end(rest) {
                tokens.push(&rest[..end]);
                pos += end;
                continue;
            }
        }
        let end = rest.find(',').unwrap_or(rest.len());
        tokens.push(&rest[..end]);
        pos += end;
    }

    tokens
}

/// Length of a leading double-quoted span, if any closing quote is
/// followed by optional whitespace and a comma or end of line. Takes the
/// first such closing quote (shortest span).
fn quoted_span_end(rest: &str) -> Option<usize> {
    let mut search_from = 1;
    while let Some(offset) = rest[search_from..].find('"') {
        let end = search_from + offset + 1;
        let tail = rest[end..].trim_start();
        if tail.is_empty() || tail.starts_with(',') {
            return Some(end);
        }
        search_from = end;
    }
    None
}

/// Strip every double-quote character, then trim surrounding whitespace.
fn clean(token: &str) -> String {
    token.replace('"', "").trim().to_string()
}
