//! Audit status values for commits and individual audit requests.
//!
//! Both enums carry a stable string key used in storage and forms. Keys
//! round-trip through `Display` and `FromStr`.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Aggregate audit status of a commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CommitAuditStatus {
    /// No audit activity
    #[default]
    None,
    /// At least one audit is outstanding
    NeedsAudit,
    /// An auditor raised a concern
    ConcernRaised,
    /// Some, but not all, audits were accepted
    PartiallyAudited,
    /// All audits were accepted
    FullyAudited,
    /// The audit was closed by the author
    Closed,
}

impl CommitAuditStatus {
    /// All statuses, in declaration order.
    pub const ALL: [CommitAuditStatus; 6] = [
        CommitAuditStatus::None,
        CommitAuditStatus::NeedsAudit,
        CommitAuditStatus::ConcernRaised,
        CommitAuditStatus::PartiallyAudited,
        CommitAuditStatus::FullyAudited,
        CommitAuditStatus::Closed,
    ];

    /// Returns the storage key.
    pub fn as_str(self) -> &'static str {
        match self {
            CommitAuditStatus::None => "none",
            CommitAuditStatus::NeedsAudit => "needs-audit",
            CommitAuditStatus::ConcernRaised => "concern-raised",
            CommitAuditStatus::PartiallyAudited => "partially-audited",
            CommitAuditStatus::FullyAudited => "fully-audited",
            CommitAuditStatus::Closed => "closed",
        }
    }
}

impl fmt::Display for CommitAuditStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommitAuditStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| Error::unknown_status(s))
    }
}

/// Status of a single auditor's request on a commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AuditStatus {
    /// No status recorded
    #[default]
    None,
    /// Auditing was evaluated and is not required
    AuditNotRequired,
    /// Auditing is required by an owners package rule
    AuditRequired,
    /// The auditor raised a concern
    Concerned,
    /// The auditor accepted the commit
    Accepted,
    /// An audit was explicitly requested and is awaiting the auditor
    AuditRequested,
    /// The auditor resigned from the audit
    Resigned,
    /// The audit was closed
    Closed,
    /// The identity is only subscribed (CC'd)
    Cc,
}

impl AuditStatus {
    /// All statuses, in declaration order.
    pub const ALL: [AuditStatus; 9] = [
        AuditStatus::None,
        AuditStatus::AuditNotRequired,
        AuditStatus::AuditRequired,
        AuditStatus::Concerned,
        AuditStatus::Accepted,
        AuditStatus::AuditRequested,
        AuditStatus::Resigned,
        AuditStatus::Closed,
        AuditStatus::Cc,
    ];

    /// Returns the storage key.
    pub fn as_str(self) -> &'static str {
        match self {
            AuditStatus::None => "",
            AuditStatus::AuditNotRequired => "audit-not-required",
            AuditStatus::AuditRequired => "audit-required",
            AuditStatus::Concerned => "concerned",
            AuditStatus::Accepted => "accepted",
            AuditStatus::AuditRequested => "requested",
            AuditStatus::Resigned => "resigned",
            AuditStatus::Closed => "closed",
            AuditStatus::Cc => "cc",
        }
    }

    /// Returns the human-readable status name.
    pub fn name(self) -> &'static str {
        match self {
            AuditStatus::None => "Not Applicable",
            AuditStatus::AuditNotRequired => "Audit Not Required",
            AuditStatus::AuditRequired => "Audit Required",
            AuditStatus::Concerned => "Concern Raised",
            AuditStatus::Accepted => "Accepted",
            AuditStatus::AuditRequested => "Audit Requested",
            AuditStatus::Resigned => "Resigned",
            AuditStatus::Closed => "Closed",
            AuditStatus::Cc => "Was CC'd",
        }
    }
}

impl fmt::Display for AuditStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuditStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| Error::unknown_status(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn commit_status_keys_parse_back() {
        for status in CommitAuditStatus::ALL {
            assert_eq!(status.as_str().parse::<CommitAuditStatus>(), Ok(status));
        }
    }

    #[test]
    fn audit_status_keys_parse_back() {
        for status in AuditStatus::ALL {
            assert_eq!(status.to_string().parse::<AuditStatus>(), Ok(status));
        }
    }

    #[test]
    fn unknown_commit_status_is_rejected() {
        let err = "accepted-ish".parse::<CommitAuditStatus>().unwrap_err();
        assert_eq!(
            err.kind(),
            &ErrorKind::UnknownStatus {
                value: "accepted-ish".to_string()
            }
        );
    }

    #[test]
    fn audit_status_names() {
        assert_eq!(AuditStatus::Concerned.name(), "Concern Raised");
        assert_eq!(AuditStatus::Cc.name(), "Was CC'd");
    }

    #[test]
    fn defaults_are_none() {
        assert_eq!(CommitAuditStatus::default(), CommitAuditStatus::None);
        assert_eq!(AuditStatus::default(), AuditStatus::None);
    }
}
