//! Human-readable analysis summary

use crate::params::ParamMap;

/// Line shown under `Parameters:` when there are none
pub const NO_PARAMS: &str = "-";

/// Render the endpoint, host and one `name = value` line per parameter
pub fn render_summary(endpoint: &str, host: &str, params: &ParamMap) -> String {
    let mut lines = vec![
        format!("Endpoint: {}", endpoint),
        format!("Host: {}", host),
        "Parameters:".to_string(),
    ];

    if params.is_empty() {
        lines.push(NO_PARAMS.to_string());
    } else {
        lines.extend(params.iter().map(|(name, value)| format!("{} = {}", name, value)));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParamValue;

    #[test]
    fn test_summary_without_params() {
        let summary = render_summary("GET /health", "-", &ParamMap::new());
        assert_eq!(summary, "Endpoint: GET /health\nHost: -\nParameters:\n-");
    }

    #[test]
    fn test_summary_with_params() {
        let mut params = ParamMap::new();
        params.insert("id".into(), "7".into());
        params.insert("tags".into(), ParamValue::list(["a", "b"]));
        let summary = render_summary("POST /items", "api.example", &params);
        assert_eq!(
            summary,
            "Endpoint: POST /items\nHost: api.example\nParameters:\nid = 7\ntags = [a, b]"
        );
    }
}
