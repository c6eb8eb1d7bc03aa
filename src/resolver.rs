use crate::action::{AuditAction, AuditActionSet};
use crate::commit::{AuditRequest, Commit};
use crate::identity::{AuthoritySet, Phid};
use crate::status::{AuditStatus, CommitAuditStatus};

/// Resolves the audit actions `user` may take on `commit`.
///
/// Comment, add-auditors, add-CCs, accept and raise-concern are always
/// offered; authors may accept their own commits. Resign is offered to
/// non-authors who hold authority over at least one request, unless their
/// own request is already resigned. Close is offered to the author while a
/// concern is outstanding.
///
/// # Examples
///
/// ```
/// use commit_audit::{
///     AuditAction, AuditRequest, AuditStatus, AuthoritySet, Commit, Phid, resolve_actions,
/// };
///
/// let commit = Commit::new(7, "PHID-CMIT-7").with_author("PHID-USER-alice");
/// let requests = vec![AuditRequest::new(
///     "PHID-CMIT-7",
///     "PHID-USER-bob",
///     AuditStatus::AuditRequested,
/// )];
/// let bob = Phid::new("PHID-USER-bob");
///
/// let actions = resolve_actions(&commit, &requests, &bob, &AuthoritySet::for_user("PHID-USER-bob"));
///
/// assert!(actions.contains(AuditAction::Resign));
/// assert!(!actions.contains(AuditAction::Close));
/// ```
pub fn resolve_actions(
    commit: &Commit,
    requests: &[AuditRequest],
    user: &Phid,
    authority: &AuthoritySet,
) -> AuditActionSet {
    let user_is_author = commit.is_authored_by(user);

    let mut actions: AuditActionSet = [
        AuditAction::Comment,
        AuditAction::AddAuditors,
        AuditAction::AddCcs,
        AuditAction::Accept,
        AuditAction::RaiseConcern,
    ]
    .into_iter()
    .collect();

    if !user_is_author && may_resign(requests, user, authority) {
        actions.insert(AuditAction::Resign);
    }

    if user_is_author && commit.audit_status == CommitAuditStatus::ConcernRaised {
        actions.insert(AuditAction::Close);
    }

    tracing::debug!(
        commit = %commit.phid,
        user = %user,
        actions = ?actions.iter().map(AuditAction::as_str).collect::<Vec<_>>(),
        "resolved audit actions"
    );

    actions
}

/// Authority over some request grants standing; the user's own request,
/// matched by exact identity, vetoes it once resigned.
fn may_resign(requests: &[AuditRequest], user: &Phid, authority: &AuthoritySet) -> bool {
    let has_authority = requests
        .iter()
        .any(|request| authority.contains(&request.auditor_phid));

    let already_resigned = requests
        .iter()
        .find(|request| request.auditor_phid == *user)
        .is_some_and(|request| request.audit_status == AuditStatus::Resigned);

    has_authority && !already_resigned
}
