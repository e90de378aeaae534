//! Literal rewrite engine: ordered exact-substring substitutions on text.
//!
//! Rules are applied strictly in list order against the progressively
//! rewritten text, so later rules see the output of earlier ones. A rule
//! whose literal is absent is a no-op, not a failure; the per-rule outcome
//! records how many occurrences were actually replaced.

use serde::Serialize;

// ============================================================================
// Types
// ============================================================================

/// How many occurrences a rule replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplaceMode {
    /// Replace only the first occurrence.
    First,
    /// Replace every non-overlapping occurrence, left to right.
    All,
}

/// A single exact-substring substitution. No pattern matching: `find` is
/// matched byte-for-byte, including any embedded newlines.
#[derive(Debug, Clone, Serialize)]
pub struct RewriteRule {
    pub find: String,
    pub replace: String,
    pub mode: ReplaceMode,
}

impl RewriteRule {
    /// Rule that replaces only the first occurrence of `find`.
    pub fn first(find: &str, replace: &str) -> Self {
        Self {
            find: find.to_string(),
            replace: replace.to_string(),
            mode: ReplaceMode::First,
        }
    }

    /// Rule that replaces every occurrence of `find`.
    pub fn all(find: &str, replace: &str) -> Self {
        Self {
            find: find.to_string(),
            replace: replace.to_string(),
            mode: ReplaceMode::All,
        }
    }
}

/// What a single rule did when applied. `replacements` is 0 when the
/// literal was not present.
#[derive(Debug, Clone, Serialize)]
pub struct RuleOutcome {
    pub find: String,
    pub replace: String,
    pub mode: ReplaceMode,
    pub replacements: usize,
}

// ============================================================================
// Application
// ============================================================================

/// Count non-overlapping occurrences of `term` in `text`, left to right.
///
/// Must agree with what `str::replace`/`str::replacen` actually replace,
/// so the scan steps past each match rather than advancing one byte.
fn count_matches(text: &str, term: &str) -> usize {
    if term.is_empty() || term.len() > text.len() {
        return 0;
    }

    let mut count = 0;
    let mut start = 0;
    while let Some(pos) = text[start..].find(term) {
        count += 1;
        start += pos + term.len();
    }

    count
}

/// Apply `rules` in order to `text`, returning the rewritten text and the
/// per-rule outcomes.
pub fn apply_rules(text: &str, rules: &[RewriteRule]) -> (String, Vec<RuleOutcome>) {
    let mut current = text.to_string();
    let mut outcomes = Vec::with_capacity(rules.len());

    for rule in rules {
        let occurrences = count_matches(&current, &rule.find);
        let replaced = match rule.mode {
            ReplaceMode::First => usize::from(occurrences > 0),
            ReplaceMode::All => occurrences,
        };

        if replaced > 0 {
            current = match rule.mode {
                ReplaceMode::First => current.replacen(&rule.find, &rule.replace, 1),
                ReplaceMode::All => current.replace(&rule.find, &rule.replace),
            };
        }

        outcomes.push(RuleOutcome {
            find: rule.find.clone(),
            replace: rule.replace.clone(),
            mode: rule.mode,
            replacements: replaced,
        });
    }

    (current, outcomes)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_mode_replaces_only_first_occurrence() {
        let rules = vec![RewriteRule::first("users", "appUsers")];
        let (out, outcomes) = apply_rules("users and users again", &rules);

        assert_eq!(out, "appUsers and users again");
        assert_eq!(outcomes[0].replacements, 1);
    }

    #[test]
    fn all_mode_replaces_every_occurrence() {
        let rules = vec![RewriteRule::all("app_users", "users")];
        let (out, outcomes) = apply_rules("app_users, app_users_email, app_users", &rules);

        assert_eq!(out, "users, users_email, users");
        assert_eq!(outcomes[0].replacements, 3);
    }

    #[test]
    fn absent_literal_is_a_no_op() {
        let rules = vec![RewriteRule::first("missing", "found")];
        let (out, outcomes) = apply_rules("nothing to see here", &rules);

        assert_eq!(out, "nothing to see here");
        assert_eq!(outcomes[0].replacements, 0);
    }

    #[test]
    fn no_match_returns_identical_text() {
        let text = "line one\nline two\n";
        let rules = vec![
            RewriteRule::first("app_users", "users"),
            RewriteRule::all("pgTable", "table"),
        ];
        let (out, _) = apply_rules(text, &rules);

        assert_eq!(out.as_bytes(), text.as_bytes());
    }

    #[test]
    fn rules_apply_in_order() {
        // The second rule only matches text produced by the first.
        let rules = vec![
            RewriteRule::first("alpha", "beta"),
            RewriteRule::first("beta gamma", "delta"),
        ];
        let (out, outcomes) = apply_rules("alpha gamma", &rules);

        assert_eq!(out, "delta");
        assert_eq!(outcomes[0].replacements, 1);
        assert_eq!(outcomes[1].replacements, 1);
    }

    #[test]
    fn earlier_rule_can_starve_a_later_one() {
        // Both rules target the same region; once the first consumes it,
        // the second silently no-ops.
        let rules = vec![
            RewriteRule::first("users.tenantId", "appUsers.tenantId"),
            RewriteRule::first("one(tenants, users.tenantId)", "one(tenants, appUsers.tenantId)"),
        ];
        let (out, outcomes) = apply_rules("one(tenants, users.tenantId)", &rules);

        assert_eq!(out, "one(tenants, appUsers.tenantId)");
        assert_eq!(outcomes[0].replacements, 1);
        assert_eq!(outcomes[1].replacements, 0);
    }

    #[test]
    fn count_is_non_overlapping() {
        // "aaa" holds two overlapping "aa" positions but replace touches one.
        let rules = vec![RewriteRule::all("aa", "b")];
        let (out, outcomes) = apply_rules("aaa", &rules);

        assert_eq!(out, "ba");
        assert_eq!(outcomes[0].replacements, 1);
    }

    #[test]
    fn empty_find_is_a_no_op() {
        let rules = vec![RewriteRule::all("", "x")];
        let (out, outcomes) = apply_rules("abc", &rules);

        assert_eq!(out, "abc");
        assert_eq!(outcomes[0].replacements, 0);
    }

    #[test]
    fn multiline_literal_matches_across_lines() {
        let rules = vec![RewriteRule::first(
            "pgTable(\n  \"app_users\",",
            "pgTable(\n  \"users\",",
        )];
        let (out, outcomes) = apply_rules("export const users = pgTable(\n  \"app_users\",\n", &rules);

        assert_eq!(out, "export const users = pgTable(\n  \"users\",\n");
        assert_eq!(outcomes[0].replacements, 1);
    }
}
