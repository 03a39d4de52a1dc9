//! Clause boundary scanning.
//!
//! Single-quoted literals and double-quoted identifiers are inert: commas and
//! parentheses inside them are ignored. A doubled quote (`''`, `""`) closes the
//! span and immediately reopens it, so escaped quotes need no special casing.
//! Backslash escapes and dollar quoting are not recognized.

use crate::error::ParseError;

/// Which delimiter ended a clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    /// `,` - more clauses follow
    Comma,
    /// `)` - the column list is closed
    CloseParen,
}

/// Position of the delimiter that ends a top-level clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClauseEnd {
    /// Byte offset of the delimiter in the scanned text
    pub offset: usize,
    pub terminator: Terminator,
}

impl ClauseEnd {
    pub fn closes_list(&self) -> bool {
        self.terminator == Terminator::CloseParen
    }
}

/// Find the end of the clause starting at `start`.
///
/// Returns the first `,` or `)` at nesting depth zero outside quotes. Running
/// off the end of the text is an unterminated clause.
pub fn find_clause_end(text: &str, start: usize) -> Result<ClauseEnd, ParseError> {
    let tail = text.get(start..).ok_or_else(|| ParseError::cannot_parse(text))?;
    let mut depth = 0usize;

    for (idx, byte) in unquoted_bytes(tail) {
        match byte {
            b'(' => depth += 1,
            b')' if depth > 0 => depth -= 1,
            b')' => {
                return Ok(ClauseEnd { offset: start + idx, terminator: Terminator::CloseParen })
            }
            b',' if depth == 0 => {
                return Ok(ClauseEnd { offset: start + idx, terminator: Terminator::Comma })
            }
            _ => {}
        }
    }

    Err(ParseError::new(format!("Unterminated clause: {}", tail.trim())))
}

/// Find the `)` matching the `(` at byte offset `open`.
pub fn find_closing_paren(text: &str, open: usize) -> Option<usize> {
    let tail = text.get(open..)?;
    if !tail.starts_with('(') {
        return None;
    }

    let mut depth = 0usize;
    for (idx, byte) in unquoted_bytes(tail) {
        match byte {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + idx);
                }
            }
            _ => {}
        }
    }
    None
}

/// Bytes of `text` that lie outside quoted spans, with their offsets.
///
/// Delimiters are ASCII, so byte offsets always fall on char boundaries.
fn unquoted_bytes(text: &str) -> impl Iterator<Item = (usize, u8)> + '_ {
    let mut quote: Option<u8> = None;
    text.bytes().enumerate().filter(move |&(_, byte)| match quote {
        Some(open) => {
            if byte == open {
                quote = None;
            }
            false
        }
        None if byte == b'\'' || byte == b'"' => {
            quote = Some(byte);
            false
        }
        None => true,
    })
}
