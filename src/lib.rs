//! Audit actions and audit panel models for commit review pages.
//!
//! This crate decides which audit actions a user is offered on a commit and
//! assembles the data behind the audit section of a commit detail page:
//! - **Resolution**: [`resolve_actions`] is a pure function of the commit,
//!   its audit requests, the viewer and the viewer's authority
//! - **Panel**: [`AuditPanel`] loads everything through an [`AuditSource`]
//!   and produces the audit table and the comment form
//! - **Explicit context**: the viewer and their authority are always passed
//!   in; nothing reads ambient request state
//!
//! # Core Types
//!
//! - [`Commit`] and [`AuditRequest`]: read-only audit records
//! - [`AuthoritySet`]: identities a user may act through
//! - [`AuditAction`] and [`AuditActionSet`]: the action catalog and ordered
//!   subsets of it
//! - [`ActionLabels`]: user-facing labels for actions
//!
//! # Examples
//!
//! ```
//! use commit_audit::{
//!     AuditAction, AuditRequest, AuditStatus, AuthoritySet, Commit, CommitAuditStatus, Phid,
//!     resolve_actions,
//! };
//!
//! let commit = Commit::new(1, "PHID-CMIT-1")
//!     .with_author("PHID-USER-alice")
//!     .with_status(CommitAuditStatus::NeedsAudit);
//! let requests = vec![AuditRequest::new(
//!     "PHID-CMIT-1",
//!     "PHID-PROJ-infra",
//!     AuditStatus::AuditRequired,
//! )];
//!
//! // Bob audits on behalf of the infra project.
//! let bob = Phid::new("PHID-USER-bob");
//! let authority = AuthoritySet::for_user(bob.clone()).with_delegate("PHID-PROJ-infra");
//!
//! let actions = resolve_actions(&commit, &requests, &bob, &authority);
//! assert!(actions.contains(AuditAction::Accept));
//! assert!(actions.contains(AuditAction::Resign));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod action;
mod commit;
mod config;
mod error;
mod identity;
pub mod panel;
mod resolver;
mod source;
mod status;

pub use action::{ActionLabels, AuditAction, AuditActionSet, DefaultLabels};
pub use commit::{AuditRequest, Commit};
pub use config::PanelConfig;
pub use error::{Error, ErrorKind};
pub use identity::{AuthoritySet, Phid, Viewer};
pub use panel::{AuditPanel, CommentForm};
pub use resolver::resolve_actions;
pub use source::{AuditSource, MemoryAuditSource};
pub use status::{AuditStatus, CommitAuditStatus};
