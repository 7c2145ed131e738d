use std::sync::LazyLock;

use regex::Regex;

/// Identifier grammar for rule and macro IDs: runs of ASCII alphanumerics
/// optionally separated by underscores.
pub const ID_PATTERN: &str = "^([a-zA-Z0-9]*_*)*$";

static ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ID_PATTERN).expect("ID_PATTERN is a valid regex"));

/// Check a candidate identifier against the grammar.
///
/// The grammar matches the empty string; callers reject empty IDs before
/// consulting it so that the missing-name error surfaces first.
pub fn is_valid_id(id: &str) -> bool {
    ID_REGEX.is_match(id)
}
