//! Label matchers and first-match selection.
//!
//! Labels are compared after normalization (mnemonic markers stripped).
//! Selection is first-match-wins in iteration order, never best-match.
//!
//! # Contribution scans
//!
//! Contribution levels mix actions and menu managers. A matching action ends
//! the scan; a matching manager only records its children as the next level
//! and the scan goes on within the current one:
//!
//! ```text
//! [&Copy, &Team ▸ [&Commit...], Re&fresh]   matcher: is "Team"
//!   &Copy     action   no match
//!   &Team     manager  match -> descend_into = [&Commit...], keep scanning
//!   Re&fresh  action   no match
//! ```


use std::fmt;
use std::sync::Arc;

use regex::Regex;
use smallvec::SmallVec;
use tracing::{debug, info};

use crate::core::constants::MNEMONIC_MARKER;
use crate::core::{Error, Result};
use crate::ui::{ContributionId, ContributionItem, ContributionKind};

/// Strips every mnemonic marker from a label.
#[must_use]
pub fn normalize(label: &str) -> String { label.replace(MNEMONIC_MARKER, "") }

type Predicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// A predicate over normalized label text with a human-readable description.
#[derive(Clone)]
pub struct Matcher {
    description: String,
    predicate: Predicate,
}

impl Matcher {
    /// Matches labels equal to `text`.
    #[must_use]
    pub fn is(text: impl Into<String>) -> Self {
        let text = text.into();
        let description = format!("is {text:?}");
        Self::with_predicate(description, move |label| label == text)
    }

    /// Matches labels containing `text`.
    #[must_use]
    pub fn contains(text: impl Into<String>) -> Self {
        let text = text.into();
        let description = format!("contains {text:?}");
        Self::with_predicate(description, move |label| label.contains(text.as_str()))
    }

    /// Matches labels starting with `prefix`.
    #[must_use]
    pub fn starts_with(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let description = format!("starts with {prefix:?}");
        Self::with_predicate(description, move |label| label.starts_with(prefix.as_str()))
    }

    /// Matches labels the regular expression finds a match in.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMatcher`] if the pattern does not compile.
    pub fn regex(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|err| Error::InvalidMatcher(format!("bad pattern {pattern:?}: {err}")))?;
        Ok(Self::with_predicate(format!("matches /{pattern}/"), move |label| regex.is_match(label)))
    }

    /// Builds a matcher from an arbitrary predicate.
    #[must_use]
    pub fn with_predicate(
        description: impl Into<String>,
        predicate: impl Fn(&str) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self { description: description.into(), predicate: Arc::new(predicate) }
    }

    /// Tests an already normalized label.
    #[must_use]
    pub fn matches(&self, normalized: &str) -> bool { (self.predicate)(normalized) }

    /// Returns the description used in logs and errors.
    #[must_use]
    pub fn description(&self) -> &str { &self.description }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Matcher").field(&self.description).finish()
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.description) }
}

impl From<&str> for Matcher {
    fn from(text: &str) -> Self { Self::is(text) }
}

impl From<String> for Matcher {
    fn from(text: String) -> Self { Self::is(text) }
}

/// An ordered list of matchers, one per menu level.
#[derive(Debug, Clone, Default)]
pub struct MenuPath(SmallVec<[Matcher; 4]>);

impl MenuPath {
    /// Builds a path of exact-label matchers.
    #[must_use]
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(labels.into_iter().map(Matcher::is).collect())
    }

    /// Appends a matcher.
    #[must_use]
    pub fn then(mut self, matcher: impl Into<Matcher>) -> Self {
        self.0.push(matcher.into());
        self
    }

    #[must_use]
    pub fn len(&self) -> usize { self.0.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &Matcher> { self.0.iter() }

    /// Returns the first `len` matchers as a new path.
    #[must_use]
    pub fn prefix(&self, len: usize) -> Self { Self(self.0.iter().take(len).cloned().collect()) }

    /// Returns the matcher descriptions, in order.
    #[must_use]
    pub fn descriptions(&self) -> Vec<String> {
        self.0.iter().map(|matcher| matcher.description().to_string()).collect()
    }

    /// Builds the failure error for this path after `attempted` matchers.
    #[must_use]
    pub fn failure(&self, attempted: usize) -> Error { Error::path_failed(self.descriptions(), attempted) }
}

impl fmt::Display for MenuPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.descriptions().join(" > "))
    }
}

impl FromIterator<Matcher> for MenuPath {
    fn from_iter<I: IntoIterator<Item = Matcher>>(iter: I) -> Self { Self(iter.into_iter().collect()) }
}

impl From<Vec<Matcher>> for MenuPath {
    fn from(matchers: Vec<Matcher>) -> Self { Self(matchers.into()) }
}

impl From<&[&str]> for MenuPath {
    fn from(labels: &[&str]) -> Self { Self::from_labels(labels.iter().copied()) }
}

impl<const N: usize> From<[&str; N]> for MenuPath {
    fn from(labels: [&str; N]) -> Self { Self::from_labels(labels) }
}

impl<'a> IntoIterator for &'a MenuPath {
    type Item = &'a Matcher;
    type IntoIter = std::slice::Iter<'a, Matcher>;

    fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}

/// Returns the first candidate whose normalized label satisfies `matcher`.
///
/// Candidates are `(node, raw label)` pairs in display order.
pub fn select_first<I, T, S>(candidates: I, matcher: &Matcher) -> Option<T>
where
    I: IntoIterator<Item = (T, S)>,
    S: AsRef<str>,
{
    for (node, label) in candidates {
        let normalized = normalize(label.as_ref());
        debug!(label = %normalized, "found item");
        if matcher.matches(&normalized) {
            info!(label = %normalized, matcher = %matcher, "item match");
            return Some(node);
        }
    }
    None
}

/// Outcome of scanning one contribution level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContributionScan {
    /// The first matching action, if the scan stopped on one.
    pub action: Option<ContributionId>,
    /// Children of the last matching menu manager seen before stopping.
    pub descend_into: Option<Vec<ContributionId>>,
}

/// Scans one contribution level in dual mode.
///
/// Actions are leaf candidates and end the scan when matched. Menu managers
/// that match record their children as the next level without ending the
/// scan. Separators are skipped.
#[must_use]
pub fn scan_contributions(items: &[ContributionItem], matcher: &Matcher) -> ContributionScan {
    let mut scan = ContributionScan::default();
    for item in items {
        let normalized = normalize(&item.text);
        match &item.kind {
            ContributionKind::Action => {
                debug!(label = %normalized, "found action");
                if matcher.matches(&normalized) {
                    info!(label = %normalized, matcher = %matcher, "action match");
                    scan.action = Some(item.id);
                    break;
                }
            }
            ContributionKind::Submenu { items: children, .. } => {
                debug!(label = %normalized, "found menu manager");
                if matcher.matches(&normalized) {
                    debug!(label = %normalized, "menu manager match");
                    scan.descend_into = Some(children.clone());
                }
            }
            ContributionKind::Separator => {}
        }
    }
    scan
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(id: u32, text: &str) -> ContributionItem {
        ContributionItem { id: ContributionId(id), text: text.to_string(), kind: ContributionKind::Action }
    }

    fn manager(id: u32, text: &str, items: &[u32]) -> ContributionItem {
        ContributionItem {
            id: ContributionId(id),
            text: text.to_string(),
            kind: ContributionKind::Submenu {
                items: items.iter().copied().map(ContributionId).collect(),
                menu: None,
            },
        }
    }

    #[test]
    fn test_normalize_strips_markers() {
        assert_eq!(normalize("&File"), "File");
        assert_eq!(normalize("E&xit"), "Exit");
        assert_eq!(normalize("Save && Close"), "Save  Close");
        assert_eq!(normalize("Plain"), "Plain");
    }

    #[test]
    fn test_builtin_matchers() {
        assert!(Matcher::is("Save").matches("Save"));
        assert!(!Matcher::is("Save").matches("Save As..."));
        assert!(Matcher::contains("As").matches("Save As..."));
        assert!(Matcher::starts_with("Run").matches("Run Configurations..."));
        assert!(Matcher::regex("^Run .*\\.{3}$").unwrap().matches("Run Configurations..."));
    }

    #[test]
    fn test_invalid_regex_is_rejected() {
        assert!(matches!(Matcher::regex("("), Err(Error::InvalidMatcher(_))));
    }

    #[test]
    fn test_matcher_descriptions() {
        assert_eq!(Matcher::is("File").to_string(), "is \"File\"");
        assert_eq!(Matcher::with_predicate("anything", |_| true).description(), "anything");
    }

    #[test]
    fn test_select_first_normalizes_and_stops_at_first() {
        let candidates = [(1, "&Open"), (2, "Open &File..."), (3, "&Open")];
        assert_eq!(select_first(candidates, &Matcher::starts_with("Open")), Some(1));
        assert_eq!(select_first(candidates, &Matcher::contains("File")), Some(2));
        assert_eq!(select_first(candidates, &Matcher::is("Close")), None);
    }

    #[test]
    fn test_menu_path_conversions() {
        let path = MenuPath::from(["File", "New", "Project..."]);
        assert_eq!(path.len(), 3);
        assert_eq!(path.prefix(2).to_string(), "is \"File\" > is \"New\"");
        let path = MenuPath::default().then("File").then(Matcher::contains("Sav"));
        assert_eq!(path.descriptions(), vec!["is \"File\"", "contains \"Sav\""]);
    }

    #[test]
    fn test_scan_stops_on_matching_action() {
        let items = [action(0, "&Copy"), action(1, "Copy &Path"), action(2, "&Copy")];
        let scan = scan_contributions(&items, &Matcher::starts_with("Copy"));
        assert_eq!(scan.action, Some(ContributionId(0)));
        assert_eq!(scan.descend_into, None);
    }

    #[test]
    fn test_scan_descends_into_manager_and_keeps_scanning() {
        let items = [manager(0, "&Team", &[5, 6]), action(1, "Team &Sync")];
        let scan = scan_contributions(&items, &Matcher::contains("Team"));
        assert_eq!(scan.descend_into, Some(vec![ContributionId(5), ContributionId(6)]));
        assert_eq!(scan.action, Some(ContributionId(1)));
    }

    #[test]
    fn test_scan_skips_separators() {
        let items = [
            ContributionItem { id: ContributionId(0), text: String::new(), kind: ContributionKind::Separator },
            action(1, ""),
        ];
        let scan = scan_contributions(&items, &Matcher::is(""));
        assert_eq!(scan.action, Some(ContributionId(1)));
    }
}
