//! CHECK-constraint enum extraction
//!
//! Scans the raw CREATE TABLE text stored in the database catalog and pulls
//! permitted literal values out of constraints shaped like
//! `CHECK (column IN ('a', 'b'))`. Column names may be bare or quoted with
//! single, double, or back-tick quotes; values may use single or double
//! quotes. Anything else (`NOT IN`, comparisons, `AND`-chained conditions,
//! subqueries) yields no entry. This is deliberately a single-shape
//! heuristic, not a SQL parser.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static CHECK_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)check\s*\(").unwrap());

// Anchored on the whole constraint body: a trailing boolean operand after the
// IN-list makes the match fail, discarding the constraint entirely.
static IN_CONSTRAINT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?is)^["'`]?(\w+)["'`]?\s+in\s*\(\s*(.+)\s*\)$"#).unwrap());

/// Parses a CREATE TABLE statement and extracts enum values from its CHECK
/// constraints.
///
/// Returns a map from lowercased column name to the ordered literal values.
/// A later constraint on the same column overwrites an earlier one. Keys are
/// lowercased regardless of the casing used in the DDL, so case-insensitive
/// lookups by column name succeed.
pub fn parse_check_constraints(sql: &str) -> HashMap<String, Vec<String>> {
    let mut result = HashMap::new();

    if sql.is_empty() {
        return result;
    }

    for body in extract_check_bodies(sql) {
        match parse_in_constraint(body) {
            Some((column, values)) => {
                result.insert(column.to_lowercase(), values);
            }
            None => {
                tracing::trace!(constraint = body, "skipping CHECK constraint without IN list");
            }
        }
    }

    result
}

/// Locates every `CHECK (` in the text and returns the constraint bodies,
/// matching the closing parenthesis by depth counting so nested parentheses
/// inside the body are handled.
fn extract_check_bodies(sql: &str) -> Vec<&str> {
    let bytes = sql.as_bytes();
    let mut bodies = Vec::new();

    for open in CHECK_OPEN.find_iter(sql) {
        let start = open.end();
        let mut depth = 1usize;
        let mut end = start;
        let mut i = start;

        while i < bytes.len() && depth > 0 {
            match bytes[i] {
                b'(' => depth += 1,
                b')' => depth -= 1,
                _ => {}
            }
            end = i;
            i += 1;
        }

        if depth == 0 {
            // `end` sits on the closing paren, which is excluded.
            bodies.push(sql[start..end].trim());
        }
    }

    bodies
}

/// Matches one constraint body against the IN-list shape and tokenizes the
/// argument list. Returns `None` when the body has any other boolean
/// structure or when no quoted values are present.
fn parse_in_constraint(body: &str) -> Option<(String, Vec<String>)> {
    let captures = IN_CONSTRAINT.captures(body.trim())?;
    let column = captures.get(1)?.as_str().to_string();
    let values = parse_quoted_values(captures.get(2)?.as_str());

    if values.is_empty() {
        return None;
    }

    Some((column, values))
}

/// Quote-aware scan of the IN-list argument text. Commas outside quotes
/// delimit values; a doubled quote character inside a quoted run decodes to
/// one literal quote; only quoted tokens are captured, so a bare token such
/// as a subquery produces nothing. Whitespace inside quotes is preserved.
fn parse_quoted_values(raw: &str) -> Vec<String> {
    let chars: Vec<char> = raw.chars().collect();
    let mut values = Vec::new();
    let mut current = String::new();
    let mut in_quote = false;
    let mut quote_char = '\0';
    // Set when a quoted run opened, so the empty string '' still counts.
    let mut has_content = false;

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];

        if !in_quote && (c == '\'' || c == '"') {
            in_quote = true;
            quote_char = c;
            has_content = true;
        } else if in_quote && c == quote_char {
            if chars.get(i + 1) == Some(&quote_char) {
                current.push(c);
                i += 1;
            } else {
                in_quote = false;
                quote_char = '\0';
            }
        } else if !in_quote && c == ',' {
            if has_content {
                values.push(std::mem::take(&mut current));
            } else {
                current.clear();
            }
            has_content = false;
        } else if in_quote {
            current.push(c);
        }

        i += 1;
    }

    if has_content {
        values.push(current);
    }

    values
}
