use crate::identity::Phid;
use crate::status::{AuditStatus, CommitAuditStatus};

/// A repository commit as seen by the audit workflow.
///
/// Read-only input to action resolution and panel assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// Numeric storage id, used for draft and preview keys
    pub id: u64,
    /// Commit identity
    pub phid: Phid,
    /// Author identity; `None` when the author is not a known user
    pub author_phid: Option<Phid>,
    /// Aggregate audit status
    pub audit_status: CommitAuditStatus,
}

impl Commit {
    /// Creates a commit with no known author and no audit activity.
    pub fn new(id: u64, phid: impl Into<Phid>) -> Self {
        Self {
            id,
            phid: phid.into(),
            author_phid: None,
            audit_status: CommitAuditStatus::None,
        }
    }

    /// Sets the author identity.
    pub fn with_author(mut self, author: impl Into<Phid>) -> Self {
        self.author_phid = Some(author.into());
        self
    }

    /// Sets the aggregate audit status.
    pub fn with_status(mut self, status: CommitAuditStatus) -> Self {
        self.audit_status = status;
        self
    }

    /// Returns true if `user` authored this commit.
    pub fn is_authored_by(&self, user: &Phid) -> bool {
        self.author_phid.as_ref() == Some(user)
    }
}

/// An auditor's assignment on a commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditRequest {
    /// The audited commit
    pub commit_phid: Phid,
    /// The assigned user, project or package
    pub auditor_phid: Phid,
    /// This auditor's individual status
    pub audit_status: AuditStatus,
}

impl AuditRequest {
    /// Creates an audit request.
    pub fn new(
        commit_phid: impl Into<Phid>,
        auditor_phid: impl Into<Phid>,
        audit_status: AuditStatus,
    ) -> Self {
        Self {
            commit_phid: commit_phid.into(),
            auditor_phid: auditor_phid.into(),
            audit_status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_author_matches_nobody() {
        let commit = Commit::new(1, "PHID-CMIT-1");
        assert!(!commit.is_authored_by(&Phid::new("PHID-USER-1")));
    }

    #[test]
    fn author_match_is_exact() {
        let commit = Commit::new(1, "PHID-CMIT-1").with_author("PHID-USER-1");
        assert!(commit.is_authored_by(&Phid::new("PHID-USER-1")));
        assert!(!commit.is_authored_by(&Phid::new("PHID-USER-2")));
    }
}
