//! Markdown parameter table
//!
//! Plain pipe tables paste cleanly into Notion and most wiki editors.

use crate::params::ParamMap;

const HEADER_ROW: &str = "| parameter | value |";
const SEPARATOR_ROW: &str = "|---|---|";

/// Render parameters as a two-column markdown table
///
/// Returns `None` when there are no parameters: no table rather than an
/// empty one.
pub fn notion_table(params: &ParamMap) -> Option<String> {
    if params.is_empty() {
        return None;
    }

    let mut rows = Vec::with_capacity(params.len() + 2);
    rows.push(HEADER_ROW.to_string());
    rows.push(SEPARATOR_ROW.to_string());

    for (name, value) in params {
        rows.push(format!(
            "| {} | {} |",
            escape_cell(name),
            escape_cell(&value.to_string())
        ));
    }

    Some(rows.join("\n"))
}

/// Keep a cell on one line and its pipes out of the column syntax
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
        .replace("\r\n", "<br>")
        .replace('\n', "<br>")
}
