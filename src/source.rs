use std::collections::HashMap;

use crate::commit::{AuditRequest, Commit};
use crate::identity::{AuthoritySet, Phid};

/// Storage and lookup services the audit panel depends on.
///
/// Each method maps to one external collaborator: commit storage, audit
/// request storage, authority resolution and draft storage. Implementations
/// return fully materialized values; the panel never mutates them.
pub trait AuditSource {
    /// Looks up a commit. Returns `None` if it has not been imported yet.
    fn load_commit(&self, commit: &Phid) -> Option<Commit>;

    /// Returns the audit requests attached to a commit.
    fn load_audit_requests(&self, commit: &Phid) -> Vec<AuditRequest>;

    /// Returns the identities `user` may exercise audit authority through.
    fn load_authority(&self, user: &Phid) -> AuthoritySet;

    /// Returns the draft text `author` saved under `key`, if any.
    fn load_draft(&self, author: &Phid, key: &str) -> Option<String>;
}

/// An in-memory [`AuditSource`].
///
/// Auditor identity is unique per commit: adding a second request for the
/// same auditor replaces the first.
///
/// # Examples
///
/// ```
/// use commit_audit::{AuditRequest, AuditSource, AuditStatus, Commit, MemoryAuditSource, Phid};
///
/// let source = MemoryAuditSource::new()
///     .with_commit(Commit::new(1, "PHID-CMIT-1"))
///     .with_request(AuditRequest::new("PHID-CMIT-1", "PHID-USER-bob", AuditStatus::AuditRequested))
///     .with_request(AuditRequest::new("PHID-CMIT-1", "PHID-USER-bob", AuditStatus::Accepted));
///
/// let requests = source.load_audit_requests(&Phid::new("PHID-CMIT-1"));
/// assert_eq!(requests.len(), 1);
/// assert_eq!(requests[0].audit_status, AuditStatus::Accepted);
/// ```
#[derive(Debug, Default, Clone)]
pub struct MemoryAuditSource {
    commits: HashMap<Phid, Commit>,
    requests: HashMap<Phid, Vec<AuditRequest>>,
    authority: HashMap<Phid, AuthoritySet>,
    drafts: HashMap<(Phid, String), String>,
}

impl MemoryAuditSource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a commit, keyed by its identity.
    pub fn with_commit(mut self, commit: Commit) -> Self {
        self.commits.insert(commit.phid.clone(), commit);
        self
    }

    /// Stores an audit request, replacing any request for the same auditor
    /// on the same commit.
    pub fn with_request(mut self, request: AuditRequest) -> Self {
        let requests = self.requests.entry(request.commit_phid.clone()).or_default();
        match requests
            .iter_mut()
            .find(|existing| existing.auditor_phid == request.auditor_phid)
        {
            Some(existing) => *existing = request,
            None => requests.push(request),
        }
        self
    }

    /// Stores the authority set resolved for `user`.
    pub fn with_authority(mut self, user: impl Into<Phid>, authority: AuthoritySet) -> Self {
        self.authority.insert(user.into(), authority);
        self
    }

    /// Stores a draft for `author` under `key`.
    pub fn with_draft(
        mut self,
        author: impl Into<Phid>,
        key: impl Into<String>,
        draft: impl Into<String>,
    ) -> Self {
        self.drafts.insert((author.into(), key.into()), draft.into());
        self
    }
}

impl AuditSource for MemoryAuditSource {
    fn load_commit(&self, commit: &Phid) -> Option<Commit> {
        self.commits.get(commit).cloned()
    }

    fn load_audit_requests(&self, commit: &Phid) -> Vec<AuditRequest> {
        self.requests.get(commit).cloned().unwrap_or_default()
    }

    fn load_authority(&self, user: &Phid) -> AuthoritySet {
        self.authority
            .get(user)
            .cloned()
            .unwrap_or_else(|| AuthoritySet::for_user(user.clone()))
    }

    fn load_draft(&self, author: &Phid, key: &str) -> Option<String> {
        self.drafts.get(&(author.clone(), key.to_string())).cloned()
    }
}
