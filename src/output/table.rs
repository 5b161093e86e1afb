//! Terminal table output for parameters

use comfy_table::{Attribute, Cell, ContentArrangement, Table};

use crate::params::ParamMap;

/// Format parameters as an ASCII table
pub fn format_params_table(params: &ParamMap) -> String {
    if params.is_empty() {
        return "(no parameters)".to_string();
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("parameter").add_attribute(Attribute::Bold),
        Cell::new("value").add_attribute(Attribute::Bold),
    ]);

    for (name, value) in params {
        table.add_row(vec![Cell::new(name), Cell::new(value.to_string())]);
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_params() {
        assert_eq!(format_params_table(&ParamMap::new()), "(no parameters)");
    }

    #[test]
    fn test_table_contains_params() {
        let mut params = ParamMap::new();
        params.insert("filename".into(), "important.pdf".into());
        let out = format_params_table(&params);
        assert!(out.contains("parameter"));
        assert!(out.contains("filename"));
        assert!(out.contains("important.pdf"));
    }
}
