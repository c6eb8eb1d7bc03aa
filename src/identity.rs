use std::collections::HashSet;
use std::fmt;

/// An opaque object identity (user, project, package or commit).
///
/// Identities are compared by value only; this crate never inspects
/// their structure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Phid(String);

impl Phid {
    /// Wraps an identity string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identity as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Phid {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Phid {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// The identities a user may exercise audit authority through.
///
/// Built by an external authority-resolution service. Always contains the
/// user's own identity plus any projects or packages they act for.
///
/// # Examples
///
/// ```
/// use commit_audit::{AuthoritySet, Phid};
///
/// let authority = AuthoritySet::for_user("PHID-USER-alice").with_delegate("PHID-PROJ-infra");
///
/// assert!(authority.contains(&Phid::new("PHID-USER-alice")));
/// assert!(authority.contains(&Phid::new("PHID-PROJ-infra")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthoritySet {
    phids: HashSet<Phid>,
}

impl AuthoritySet {
    /// Creates an empty set. Useful for anonymous viewers.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a set containing only the user's own identity.
    pub fn for_user(user: impl Into<Phid>) -> Self {
        Self::empty().with_delegate(user)
    }

    /// Adds an identity the user may act through.
    pub fn with_delegate(mut self, phid: impl Into<Phid>) -> Self {
        self.phids.insert(phid.into());
        self
    }

    /// Returns true if the user holds authority over `phid`.
    pub fn contains(&self, phid: &Phid) -> bool {
        self.phids.contains(phid)
    }

    /// Returns the number of identities in the set.
    pub fn len(&self) -> usize {
        self.phids.len()
    }

    /// Returns true if the set holds no identities.
    pub fn is_empty(&self) -> bool {
        self.phids.is_empty()
    }
}

impl<P: Into<Phid>> FromIterator<P> for AuthoritySet {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self {
            phids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// The user viewing a commit, with the authority resolved for them.
#[derive(Debug, Clone)]
pub struct Viewer {
    /// The viewer's own identity
    pub phid: Phid,
    /// Identities the viewer may act through, including `phid`
    pub authority: AuthoritySet,
}

impl Viewer {
    /// Creates a viewer. The viewer's own identity is always added to
    /// `authority`.
    pub fn new(phid: impl Into<Phid>, authority: AuthoritySet) -> Self {
        let phid = phid.into();
        let authority = authority.with_delegate(phid.clone());
        Self { phid, authority }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_user_contains_self() {
        let set = AuthoritySet::for_user("PHID-USER-1");
        assert_eq!(set.len(), 1);
        assert!(set.contains(&Phid::new("PHID-USER-1")));
    }

    #[test]
    fn empty_set_contains_nothing() {
        let set = AuthoritySet::empty();
        assert!(set.is_empty());
        assert!(!set.contains(&Phid::new("PHID-USER-1")));
    }

    #[test]
    fn collects_from_iterator() {
        let set: AuthoritySet = ["PHID-USER-1", "PHID-PROJ-1", "PHID-USER-1"]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn viewer_always_has_authority_over_self() {
        let viewer = Viewer::new("PHID-USER-1", AuthoritySet::empty());
        assert!(viewer.authority.contains(&viewer.phid));
    }

    #[test]
    fn phid_display_is_raw_value() {
        assert_eq!(Phid::new("PHID-CMIT-abc").to_string(), "PHID-CMIT-abc");
    }
}
