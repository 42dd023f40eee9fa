//! Small utility helpers shared across the crate.

/// Return the first non-empty value `lookup` yields for `keys`, or `None`.
pub fn lookup_first<F>(keys: &[&str], lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    keys.iter()
        .filter_map(|key| lookup(*key))
        .find(|value| !value.trim().is_empty())
}

/// Normalise a URL by prepending `http://` or `https://` when the scheme is missing.
pub fn normalize_url(raw: &str) -> String {
    if raw.contains("://") {
        return raw.to_string();
    }
    let scheme = if raw.starts_with("localhost") || raw.starts_with("127.") || raw.contains(":80") {
        "http"
    } else {
        "https"
    };
    format!("{scheme}://{raw}")
}

/// Strip common leading indentation from every line and trim blank edges.
///
/// Lets prompt literals be written indented in source.
pub fn dedent(text: &str) -> String {
    let indent = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);
    text.lines()
        .map(|line| line.get(indent..).unwrap_or("").trim_end())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lookup_first_skips_blank_values() {
        let lookup = |key: &str| match key {
            "A" => Some("   ".to_string()),
            "B" => Some("value".to_string()),
            _ => None,
        };
        assert_eq!(lookup_first(&["A", "B"], lookup), Some("value".to_string()));
        assert_eq!(lookup_first(&["C"], lookup), None);
    }

    #[test]
    fn normalize_url_fills_missing_scheme() {
        assert_eq!(normalize_url("localhost:8080/v1"), "http://localhost:8080/v1");
        assert_eq!(normalize_url("api.example.com/v1"), "https://api.example.com/v1");
        assert_eq!(normalize_url("http://x.test"), "http://x.test");
    }

    #[test]
    fn dedent_removes_shared_indentation() {
        let text = "\n    first line\n      nested\n    last\n    ";
        assert_eq!(dedent(text), "first line\n  nested\nlast");
    }
}
