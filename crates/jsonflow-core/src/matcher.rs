//! Resolve a typed path query to a node id

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::path::ROOT;

static DOT_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.+").unwrap());
static DOT_INDEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.([0-9]+)").unwrap());

/// Which strategy produced a match, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Exact,
    /// A node id contains the query.
    ForwardSubstring,
    /// The query contains a node id.
    ReverseSubstring,
    CaseInsensitive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub id: String,
    pub tier: MatchTier,
}

impl Resolution {
    /// Status line for a search outcome.
    pub fn status(resolution: Option<&Resolution>) -> String {
        match resolution {
            Some(r) => format!("Match found: {}", r.id),
            None => "No match found".to_string(),
        }
    }
}

/// Canonicalize user input: `items.0.price` → `$.items[0].price`.
///
/// Returns `None` for blank input.
pub fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let rooted = if trimmed.starts_with(ROOT) {
        trimmed.to_string()
    } else {
        format!("{ROOT}.{trimmed}")
    };

    let collapsed = DOT_RUNS.replace_all(&rooted, ".");
    let stripped = collapsed.strip_suffix('.').unwrap_or(&*collapsed);
    Some(DOT_INDEX.replace_all(stripped, "[${1}]").into_owned())
}

/// Resolve `query` against `node_ids` and report the tier that matched.
///
/// Ties inside a tier go to the first id in slice order.
pub fn resolve_with_tier<S: AsRef<str>>(query: &str, node_ids: &[S]) -> Option<Resolution> {
    let normalized = normalize_query(query)?;
    let ids = || node_ids.iter().map(|s| AsRef::<str>::as_ref(s));
    let found = |id: &str, tier| {
        Some(Resolution {
            id: id.to_string(),
            tier,
        })
    };

    if let Some(id) = ids().find(|id| *id == normalized) {
        return found(id, MatchTier::Exact);
    }
    if let Some(id) = ids().find(|id| id.contains(normalized.as_str())) {
        return found(id, MatchTier::ForwardSubstring);
    }
    if let Some(id) = ids().find(|id| normalized.contains(id)) {
        return found(id, MatchTier::ReverseSubstring);
    }
    let folded = normalized.to_lowercase();
    if let Some(id) = ids().find(|id| id.to_lowercase().contains(folded.as_str())) {
        return found(id, MatchTier::CaseInsensitive);
    }

    tracing::debug!("No node matches {}", normalized);
    None
}

/// Resolve `query` to a single node id, if any.
pub fn resolve<S: AsRef<str>>(query: &str, node_ids: &[S]) -> Option<String> {
    resolve_with_tier(query, node_ids).map(|r| r.id)
}
