//! Three-tier classifier: table match, then URL-shape fallback.

use crate::table::CategoryTable;
use regex::Regex;

/// Label for URL-shaped entries that match no category.
pub const OTHER: &str = "other";
/// Label for entries whose url is not URL-shaped or whose fields look misaligned.
pub const UNCATEGORIZED: &str = "uncategorized";

static DOMAIN_SHAPE: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"([a-zA-Z0-9.-]+\.[a-zA-Z]{2,})(/.*)?").expect("domain shape pattern is valid")
});

/// First category (in table order) with a domain substring inside `url`.
pub fn match_table<'a>(url: &str, table: &'a CategoryTable) -> Option<&'a str> {
    table
        .iter()
        .find(|c| c.domains.iter().any(|d| url.contains(d.as_str())))
        .map(|c| c.name.as_str())
}

/// Does `url` contain something shaped like `host.tld[/path]`.
pub fn is_domain_shaped(url: &str) -> bool {
    DOMAIN_SHAPE.is_match(url)
}

/// Classify a tokenized (url, username) pair.
pub fn classify<'a>(url: &str, username: &str, table: &'a CategoryTable) -> &'a str {
    if let Some(name) = match_table(url, table) {
        return name;
    }
    // A username carrying "http" means the fields were split in the wrong place.
    if !is_domain_shaped(url) || username.contains("http") {
        return UNCATEGORIZED;
    }
    OTHER
}
