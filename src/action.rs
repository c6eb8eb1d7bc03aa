use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// An action a user may take from the audit comment form.
///
/// Variants are declared in catalog order; `AuditActionSet` iterates in
/// this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AuditAction {
    /// Leave a comment without changing audit state
    Comment,
    /// Add auditors to the commit
    AddAuditors,
    /// Add subscribers to the commit
    AddCcs,
    /// Accept the commit
    Accept,
    /// Raise a concern with the commit
    RaiseConcern,
    /// Resign from an audit the user holds authority over
    Resign,
    /// Close an outstanding concern as the author
    Close,
}

impl AuditAction {
    /// The full catalog, in declaration order.
    pub const ALL: [AuditAction; 7] = [
        AuditAction::Comment,
        AuditAction::AddAuditors,
        AuditAction::AddCcs,
        AuditAction::Accept,
        AuditAction::RaiseConcern,
        AuditAction::Resign,
        AuditAction::Close,
    ];

    /// Returns the key submitted by the comment form.
    pub fn as_str(self) -> &'static str {
        match self {
            AuditAction::Comment => "none",
            AuditAction::AddAuditors => "add_auditors",
            AuditAction::AddCcs => "add_ccs",
            AuditAction::Accept => "accept",
            AuditAction::RaiseConcern => "concern",
            AuditAction::Resign => "resign",
            AuditAction::Close => "close",
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuditAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| Error::unknown_status(s))
    }
}

/// An ordered subset of the action catalog.
///
/// Iteration always follows catalog order, regardless of insertion order.
///
/// # Examples
///
/// ```
/// use commit_audit::{AuditAction, AuditActionSet};
///
/// let mut set = AuditActionSet::new();
/// set.insert(AuditAction::Close);
/// set.insert(AuditAction::Comment);
///
/// let actions: Vec<_> = set.iter().collect();
/// assert_eq!(actions, vec![AuditAction::Comment, AuditAction::Close]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AuditActionSet {
    bits: u8,
}

impl AuditActionSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an action. Adding an action twice has no effect.
    pub fn insert(&mut self, action: AuditAction) {
        self.bits |= action.bit();
    }

    /// Returns true if the set contains `action`.
    pub fn contains(&self, action: AuditAction) -> bool {
        self.bits & action.bit() != 0
    }

    /// Returns the number of actions in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Iterates over the actions in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = AuditAction> + '_ {
        AuditAction::ALL
            .into_iter()
            .filter(move |action| self.contains(*action))
    }
}

impl FromIterator<AuditAction> for AuditActionSet {
    fn from_iter<I: IntoIterator<Item = AuditAction>>(iter: I) -> Self {
        let mut set = Self::new();
        for action in iter {
            set.insert(action);
        }
        set
    }
}

/// Supplies user-facing labels for audit actions.
///
/// Implement this to localize the comment form.
pub trait ActionLabels {
    /// Returns the label shown for `action`.
    fn label(&self, action: AuditAction) -> Cow<'_, str>;
}

/// English labels.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLabels;

impl ActionLabels for DefaultLabels {
    fn label(&self, action: AuditAction) -> Cow<'_, str> {
        Cow::Borrowed(match action {
            AuditAction::Comment => "Comment",
            AuditAction::AddAuditors => "Add Auditors",
            AuditAction::AddCcs => "Add CCs",
            AuditAction::Accept => "Accept Commit",
            AuditAction::RaiseConcern => "Raise Concern",
            AuditAction::Resign => "Resign from Audit",
            AuditAction::Close => "Close Audit",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_iterates_in_catalog_order() {
        let set: AuditActionSet = [
            AuditAction::Close,
            AuditAction::Accept,
            AuditAction::Comment,
            AuditAction::Resign,
        ]
        .into_iter()
        .collect();

        let order: Vec<_> = set.iter().collect();
        assert_eq!(
            order,
            vec![
                AuditAction::Comment,
                AuditAction::Accept,
                AuditAction::Resign,
                AuditAction::Close,
            ]
        );
    }

    #[test]
    fn insert_is_idempotent() {
        let mut set = AuditActionSet::new();
        set.insert(AuditAction::Accept);
        set.insert(AuditAction::Accept);
        assert_eq!(set.len(), 1);
        assert!(!set.is_empty());
    }

    #[test]
    fn form_keys_parse_back() {
        for action in AuditAction::ALL {
            assert_eq!(action.as_str().parse::<AuditAction>(), Ok(action));
        }
        assert!("approve".parse::<AuditAction>().is_err());
    }

    #[test]
    fn comment_key_is_none() {
        assert_eq!(AuditAction::Comment.as_str(), "none");
        assert_eq!(AuditAction::RaiseConcern.to_string(), "concern");
    }

    #[test]
    fn default_labels() {
        let labels = DefaultLabels;
        assert_eq!(labels.label(AuditAction::Resign), "Resign from Audit");
        assert_eq!(labels.label(AuditAction::AddCcs), "Add CCs");
    }
}
