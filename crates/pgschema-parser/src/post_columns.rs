//! Table options that follow the closing parenthesis of the column list.

use std::ops::Range;

use pgschema_catalog::Table;
use tracing::debug;

use crate::scanner::find_closing_paren;

const INHERITS: &str = "INHERITS";
const WITH_OIDS: &str = "WITH OIDS";
const WITHOUT_OIDS: &str = "WITHOUT OIDS";

/// Apply `INHERITS (...)` and `WITH OIDS` / `WITHOUT OIDS` to `table`.
///
/// Returns the text with every recognized option removed. Anything left in
/// it was not understood.
pub fn parse_post_columns(table: &mut Table, text: &str) -> String {
    let mut residual = text.to_string();

    if let Some((range, parents)) = find_inherits(&residual) {
        debug!(table = %table.name, inherits = %parents, "table inherits");
        table.set_inherits(&parents);
        residual.replace_range(range, "");
    }

    if residual.contains(WITH_OIDS) {
        table.set_with_oids(true);
        residual = residual.replacen(WITH_OIDS, "", 1);
    } else if residual.contains(WITHOUT_OIDS) {
        table.set_with_oids(false);
        residual = residual.replacen(WITHOUT_OIDS, "", 1);
    }

    residual
}

/// Locate `INHERITS (<parents>)[;]`, returning the byte range of the whole
/// fragment and the trimmed parent list.
fn find_inherits(text: &str) -> Option<(Range<usize>, String)> {
    text.match_indices(INHERITS).find_map(|(start, keyword)| {
        let after_keyword = start + keyword.len();
        let rest = &text[after_keyword..];
        let open = after_keyword + (rest.len() - rest.trim_start().len());
        let close = find_closing_paren(text, open)?;

        let mut end = close + 1;
        let tail = &text[end..];
        let tail_trimmed = tail.trim_start();
        if tail_trimmed.starts_with(';') {
            end += tail.len() - tail_trimmed.len() + 1;
        }

        Some((start..end, text[open + 1..close].trim().to_string()))
    })
}
