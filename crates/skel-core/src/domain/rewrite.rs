//! Literal identifier substitution.
//!
//! Skeleton files are written against a placeholder module identifier. To
//! instantiate a skeleton every file is run through [`rewrite`] with a
//! [`SubstitutionRuleSet`] derived from the placeholder and the caller's
//! target identifier.
//!
//! The rewrite is purely textual. It does not parse Go (or anything else),
//! so a placeholder that happens to appear inside a comment or string
//! literal is rewritten too. Rule 3 is scoped to `<root>.` rather than the
//! bare root segment so ordinary words in prose survive, but that is a
//! mitigation, not a guarantee.

use crate::domain::value_objects::ModuleIdentifier;

/// One global literal replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionRule {
    pattern: String,
    replacement: String,
}

impl SubstitutionRule {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    fn is_noop(&self) -> bool {
        self.pattern.is_empty() || self.pattern == self.replacement
    }
}

/// Ordered substitution rules.
///
/// Order:
/// 1. full placeholder identifier → full target identifier
/// 2. `package <placeholder root>` → `package <target root>`
/// 3. `<placeholder root>.` → `<target root>.`
///
/// Rule 1 runs first because it can itself change occurrences of the
/// placeholder's root segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionRuleSet {
    rules: Vec<SubstitutionRule>,
}

impl SubstitutionRuleSet {
    pub fn derive(placeholder: &ModuleIdentifier, target: &ModuleIdentifier) -> Self {
        let old_root = placeholder.root_segment();
        let new_root = target.root_segment();

        Self {
            rules: vec![
                SubstitutionRule::new(placeholder.as_str(), target.as_str()),
                SubstitutionRule::new(format!("package {old_root}"), format!("package {new_root}")),
                SubstitutionRule::new(format!("{old_root}."), format!("{new_root}.")),
            ],
        }
    }

    pub fn rules(&self) -> &[SubstitutionRule] {
        &self.rules
    }

    /// `true` when applying the set can never change any input.
    pub fn is_identity(&self) -> bool {
        self.rules.iter().all(SubstitutionRule::is_noop)
    }
}

/// Apply every rule, in order, replacing all occurrences.
///
/// Works on raw bytes so non-UTF-8 payload files pass through untouched
/// unless they contain a pattern.
pub fn rewrite(content: &[u8], rules: &SubstitutionRuleSet) -> Vec<u8> {
    let mut current = content.to_vec();
    for rule in rules.rules().iter().filter(|r| !r.is_noop()) {
        current = replace_all(
            &current,
            rule.pattern().as_bytes(),
            rule.replacement().as_bytes(),
        );
    }
    current
}

fn replace_all(haystack: &[u8], pattern: &[u8], replacement: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(haystack.len());
    let mut rest = haystack;

    while let Some(pos) = find(rest, pattern) {
        out.extend_from_slice(&rest[..pos]);
        out.extend_from_slice(replacement);
        rest = &rest[pos + pattern.len()..];
    }

    out.extend_from_slice(rest);
    out
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}
