use std::sync::LazyLock;

use regex::Regex;

use crate::error::AdapterError;

/// Adapter name carried by listing failures.
pub const LISTING_ADAPTER: &str = "at-listing-tool";

static LISTING_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(AT-[0-9]{4}):\s*(.+)$").unwrap());

/// One implemented acceptance test as reported by the listing command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedTest {
    pub id: String,
    pub description: String,
}

/// Parse `AT-####: description` lines.
///
/// Empty lines are skipped and do not count towards line numbers. Any other
/// line that does not match fails the whole parse, naming every offending
/// line (1-based).
pub fn parse_listing(raw: &str) -> Result<Vec<ListedTest>, AdapterError> {
    let mut malformed = Vec::new();
    let mut tests = Vec::new();

    for (i, line) in raw.trim().split('\n').filter(|l| !l.is_empty()).enumerate() {
        match LISTING_LINE.captures(line) {
            Some(caps) => tests.push(ListedTest {
                id: caps[1].to_string(),
                description: caps[2].trim().to_string(),
            }),
            None => malformed.push((i + 1).to_string()),
        }
    }

    if malformed.is_empty() {
        Ok(tests)
    } else {
        Err(AdapterError::new(
            LISTING_ADAPTER,
            format!("Malformed lines found at line numbers: {}", malformed.join(", ")),
        ))
    }
}
