//! Element matching criteria.
//!
//! A [`MatchCriteria`] describes which elements to extract: a target local
//! name, an optional namespace prefix, and whether comparison ignores case.
//! It is constructed once by the driver and borrowed read-only by both
//! traversal modes.

use std::borrow::Cow;

/// Criteria for matching an element's `(prefix, local name)` pair.
///
/// When case-insensitive matching is requested, the stored name and prefix
/// are uppercased once at construction; per-candidate folding operates on
/// throwaway copies so parser-owned data is never mutated.
#[derive(Debug, Clone)]
pub struct MatchCriteria {
    name: String,
    prefix: Option<String>,
    case_insensitive: bool,
}

impl MatchCriteria {
    /// Create new criteria for the given target name.
    ///
    /// # Arguments
    /// * `name` - Target element local name
    /// * `prefix` - If `Some`, the candidate's namespace prefix must match too
    /// * `case_insensitive` - Ignore case of name (and prefix)
    #[must_use]
    pub fn new(name: impl Into<String>, prefix: Option<String>, case_insensitive: bool) -> Self {
        let mut name = name.into();
        let mut prefix = prefix;
        if case_insensitive {
            name = name.to_uppercase();
            prefix = prefix.map(|p| p.to_uppercase());
        }
        Self {
            name,
            prefix,
            case_insensitive,
        }
    }

    /// The target local name (folded if case-insensitive).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether matching ignores case.
    #[must_use]
    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Check whether a candidate `(prefix, local name)` pair matches.
    ///
    /// The prefix is ignored entirely when the criteria carry no prefix.
    /// With a criteria prefix, two absent prefixes are equal and an absent
    /// prefix never equals a present one.
    #[must_use]
    pub fn matches(&self, candidate_prefix: Option<&str>, candidate_name: &str) -> bool {
        if !self.name_matches(candidate_name) {
            return false;
        }
        match self.prefix.as_deref() {
            None => true,
            Some(wanted) => candidate_prefix.is_some_and(|p| self.fold(p) == wanted),
        }
    }

    /// Check only the local name against the target.
    ///
    /// Used as the retention filter in tree mode, where subtrees are kept
    /// by name before the full criteria are applied per node.
    #[must_use]
    pub fn name_matches(&self, candidate_name: &str) -> bool {
        self.fold(candidate_name) == self.name
    }

    /// Fold a candidate string for comparison, on a private copy.
    fn fold<'a>(&self, s: &'a str) -> Cow<'a, str> {
        if self.case_insensitive {
            Cow::Owned(s.to_uppercase())
        } else {
            Cow::Borrowed(s)
        }
    }
}
