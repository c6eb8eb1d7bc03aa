//! Audit panel assembly for the commit detail page.
//!
//! [`AuditPanel::load`] gathers a commit, its audit requests and the
//! viewer's authority from an [`AuditSource`], resolves the available
//! actions, and produces plain data models a renderer turns into the audit
//! table and the "add comment" form.

use crate::action::{ActionLabels, AuditAction, AuditActionSet, DefaultLabels};
use crate::commit::{AuditRequest, Commit};
use crate::config::PanelConfig;
use crate::error::Error;
use crate::identity::{AuthoritySet, Phid, Viewer};
use crate::resolver::resolve_actions;
use crate::source::AuditSource;
use crate::status::AuditStatus;

/// Form endpoint that receives audit comments.
pub const ADD_COMMENT_URI: &str = "/audit/addcomment/";

/// Returns the draft key the comment text area is saved under.
pub fn draft_key(commit: &Commit) -> String {
    format!("diffusion-audit-{}", commit.id)
}

/// Returns the URI that renders a live preview of the comment.
pub fn preview_uri(commit: &Commit) -> String {
    format!("/audit/preview/{}/", commit.id)
}

/// One option of the action selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOption {
    /// The action
    pub action: AuditAction,
    /// Submitted form value
    pub key: &'static str,
    /// Display label
    pub label: String,
}

/// A typeahead control for adding identities to the commit.
///
/// Hidden until the action selector is set to `shown_for`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenizer {
    /// Form field name
    pub name: &'static str,
    /// Control label
    pub label: &'static str,
    /// Element id of the tokenizer
    pub id: &'static str,
    /// Typeahead data source
    pub typeahead_uri: &'static str,
    /// Placeholder text
    pub placeholder: &'static str,
    /// Action that reveals this control
    pub shown_for: AuditAction,
    /// Whether typeahead results are fetched on demand
    pub on_demand: bool,
}

impl Tokenizer {
    fn auditors(config: &PanelConfig) -> Self {
        Self {
            name: "auditors",
            label: "Add Auditors",
            id: "add-auditors-tokenizer",
            typeahead_uri: "/typeahead/common/users/",
            placeholder: "Type a user name...",
            shown_for: AuditAction::AddAuditors,
            on_demand: config.tokenizer_on_demand(),
        }
    }

    fn ccs(config: &PanelConfig) -> Self {
        Self {
            name: "ccs",
            label: "Add CCs",
            id: "add-ccs-tokenizer",
            typeahead_uri: "/typeahead/common/mailable/",
            placeholder: "Type a user or mailing list...",
            shown_for: AuditAction::AddCcs,
            on_demand: config.tokenizer_on_demand(),
        }
    }
}

/// The "add audit comment" form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentForm {
    /// Form action URI
    pub submit_uri: &'static str,
    /// Hidden `commit` field value
    pub commit_phid: Phid,
    /// Action selector options, in catalog order
    pub actions: Vec<ActionOption>,
    /// Auditor tokenizer
    pub auditors: Tokenizer,
    /// CC tokenizer
    pub ccs: Tokenizer,
    /// Saved comment text, if the viewer left a draft
    pub draft: Option<String>,
    /// Live preview endpoint
    pub preview_uri: String,
    /// Submit button label
    pub submit_label: &'static str,
    /// Panel header
    pub header: &'static str,
}

impl CommentForm {
    /// Builds the form for `commit` offering `actions`.
    pub fn new(
        commit: &Commit,
        actions: &AuditActionSet,
        draft: Option<String>,
        labels: &dyn ActionLabels,
        config: &PanelConfig,
    ) -> Self {
        let actions = actions
            .iter()
            .map(|action| ActionOption {
                action,
                key: action.as_str(),
                label: labels.label(action).into_owned(),
            })
            .collect();

        let (submit_label, header) = if config.serious_business() {
            ("Submit", "Audit Commit")
        } else {
            ("Cook the Books", "Creative Accounting")
        };

        Self {
            submit_uri: ADD_COMMENT_URI,
            commit_phid: commit.phid.clone(),
            actions,
            auditors: Tokenizer::auditors(config),
            ccs: Tokenizer::ccs(config),
            draft,
            preview_uri: preview_uri(commit),
            submit_label,
            header,
        }
    }

    /// Returns true if the selector offers `action`.
    pub fn offers(&self, action: AuditAction) -> bool {
        self.actions.iter().any(|option| option.action == action)
    }
}

/// One row of the audit table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditTableRow {
    /// The assigned auditor
    pub auditor_phid: Phid,
    /// The auditor's status
    pub status: AuditStatus,
    /// Whether the viewer holds authority over this auditor
    pub is_authority: bool,
}

/// Builds the audit table rows, in request order.
pub fn audit_table(requests: &[AuditRequest], authority: &AuthoritySet) -> Vec<AuditTableRow> {
    requests
        .iter()
        .map(|request| AuditTableRow {
            auditor_phid: request.auditor_phid.clone(),
            status: request.audit_status,
            is_authority: authority.contains(&request.auditor_phid),
        })
        .collect()
}

/// The audit section of a commit detail page.
#[derive(Debug, Clone)]
pub struct AuditPanel {
    /// The commit under audit
    pub commit: Commit,
    /// The viewing user
    pub viewer: Viewer,
    /// Actions available to the viewer
    pub actions: AuditActionSet,
    /// Audit table rows
    pub table: Vec<AuditTableRow>,
    /// The comment form
    pub form: CommentForm,
}

impl AuditPanel {
    /// Loads the panel with English action labels.
    ///
    /// # Errors
    ///
    /// Returns an `UnparsedCommit` error if the source has no record of
    /// `commit_phid`.
    ///
    /// # Examples
    ///
    /// ```
    /// use commit_audit::{
    ///     AuditAction, AuditPanel, AuditRequest, AuditStatus, Commit, CommitAuditStatus,
    ///     MemoryAuditSource, PanelConfig, Phid,
    /// };
    ///
    /// let source = MemoryAuditSource::new()
    ///     .with_commit(
    ///         Commit::new(42, "PHID-CMIT-42")
    ///             .with_author("PHID-USER-alice")
    ///             .with_status(CommitAuditStatus::ConcernRaised),
    ///     )
    ///     .with_request(AuditRequest::new(
    ///         "PHID-CMIT-42",
    ///         "PHID-USER-bob",
    ///         AuditStatus::Concerned,
    ///     ));
    ///
    /// let panel = AuditPanel::load(
    ///     &source,
    ///     &Phid::new("PHID-CMIT-42"),
    ///     &Phid::new("PHID-USER-alice"),
    ///     &PanelConfig::default(),
    /// )
    /// .unwrap();
    ///
    /// assert!(panel.form.offers(AuditAction::Close));
    /// assert_eq!(panel.table.len(), 1);
    /// ```
    pub fn load<S>(
        source: &S,
        commit_phid: &Phid,
        viewer_phid: &Phid,
        config: &PanelConfig,
    ) -> Result<Self, Error>
    where
        S: AuditSource + ?Sized,
    {
        Self::load_with_labels(source, commit_phid, viewer_phid, config, &DefaultLabels)
    }

    /// Loads the panel, labelling actions with `labels`.
    ///
    /// # Errors
    ///
    /// Returns an `UnparsedCommit` error if the source has no record of
    /// `commit_phid`.
    pub fn load_with_labels<S>(
        source: &S,
        commit_phid: &Phid,
        viewer_phid: &Phid,
        config: &PanelConfig,
        labels: &dyn ActionLabels,
    ) -> Result<Self, Error>
    where
        S: AuditSource + ?Sized,
    {
        let Some(commit) = source.load_commit(commit_phid) else {
            tracing::warn!(commit = %commit_phid, "commit has not been parsed");
            return Err(Error::unparsed_commit());
        };

        let requests = source.load_audit_requests(&commit.phid);
        let viewer = Viewer::new(viewer_phid.clone(), source.load_authority(viewer_phid));

        let actions = resolve_actions(&commit, &requests, &viewer.phid, &viewer.authority);
        let table = audit_table(&requests, &viewer.authority);
        let draft = source.load_draft(&viewer.phid, &draft_key(&commit));
        let form = CommentForm::new(&commit, &actions, draft, labels, config);

        tracing::debug!(
            commit = %commit.phid,
            viewer = %viewer.phid,
            requests = requests.len(),
            has_draft = form.draft.is_some(),
            "loaded audit panel"
        );

        Ok(Self {
            commit,
            viewer,
            actions,
            table,
            form,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::*;
    use crate::error::ErrorKind;
    use crate::source::MemoryAuditSource;
    use crate::status::CommitAuditStatus;

    fn source() -> MemoryAuditSource {
        MemoryAuditSource::new()
            .with_commit(
                Commit::new(9, "C9")
                    .with_author("U1")
                    .with_status(CommitAuditStatus::NeedsAudit),
            )
            .with_request(AuditRequest::new("C9", "U2", AuditStatus::AuditRequested))
            .with_request(AuditRequest::new("C9", "PROJ-1", AuditStatus::AuditRequired))
            .with_authority("U2", AuthoritySet::for_user("U2").with_delegate("PROJ-1"))
    }

    struct Shouting;

    impl ActionLabels for Shouting {
        fn label(&self, action: AuditAction) -> Cow<'_, str> {
            Cow::Owned(action.as_str().to_uppercase())
        }
    }

    #[test]
    fn missing_commit_is_unparsed() {
        let err = AuditPanel::load(
            &MemoryAuditSource::new(),
            &Phid::new("C404"),
            &Phid::new("U1"),
            &PanelConfig::default(),
        )
        .unwrap_err();

        assert_eq!(err.kind(), &ErrorKind::UnparsedCommit);
    }

    #[test]
    fn form_options_follow_resolved_actions() {
        let panel = AuditPanel::load(
            &source(),
            &Phid::new("C9"),
            &Phid::new("U2"),
            &PanelConfig::default(),
        )
        .unwrap();

        let keys: Vec<_> = panel.form.actions.iter().map(|o| o.key).collect();
        assert_eq!(
            keys,
            vec!["none", "add_auditors", "add_ccs", "accept", "concern", "resign"]
        );
        assert_eq!(panel.form.actions[3].label, "Accept Commit");
        assert_eq!(panel.form.commit_phid, Phid::new("C9"));
        assert_eq!(panel.form.submit_uri, "/audit/addcomment/");
        assert_eq!(panel.form.preview_uri, "/audit/preview/9/");
    }

    #[test]
    fn table_marks_authority_rows() {
        let panel = AuditPanel::load(
            &source(),
            &Phid::new("C9"),
            &Phid::new("U3"),
            &PanelConfig::default(),
        )
        .unwrap();

        assert!(panel.table.iter().all(|row| !row.is_authority));

        let panel = AuditPanel::load(
            &source(),
            &Phid::new("C9"),
            &Phid::new("U2"),
            &PanelConfig::default(),
        )
        .unwrap();

        assert!(panel.table.iter().all(|row| row.is_authority));
        assert_eq!(panel.table[1].status, AuditStatus::AuditRequired);
    }

    #[test]
    fn draft_is_loaded_for_viewer() {
        let source = source().with_draft("U2", "diffusion-audit-9", "half a thought");

        let panel = AuditPanel::load(
            &source,
            &Phid::new("C9"),
            &Phid::new("U2"),
            &PanelConfig::default(),
        )
        .unwrap();
        assert_eq!(panel.form.draft.as_deref(), Some("half a thought"));

        let panel = AuditPanel::load(
            &source,
            &Phid::new("C9"),
            &Phid::new("U1"),
            &PanelConfig::default(),
        )
        .unwrap();
        assert_eq!(panel.form.draft, None);
    }

    #[test]
    fn wording_follows_config() {
        let serious = AuditPanel::load(
            &source(),
            &Phid::new("C9"),
            &Phid::new("U1"),
            &PanelConfig::default(),
        )
        .unwrap();
        assert_eq!(serious.form.submit_label, "Submit");
        assert_eq!(serious.form.header, "Audit Commit");

        let playful = AuditPanel::load(
            &source(),
            &Phid::new("C9"),
            &Phid::new("U1"),
            &PanelConfig::default().with_serious_business(false),
        )
        .unwrap();
        assert_eq!(playful.form.submit_label, "Cook the Books");
        assert_eq!(playful.form.header, "Creative Accounting");
    }

    #[test]
    fn tokenizers_are_tied_to_their_actions() {
        let panel = AuditPanel::load(
            &source(),
            &Phid::new("C9"),
            &Phid::new("U1"),
            &PanelConfig::default().with_tokenizer_on_demand(true),
        )
        .unwrap();

        assert_eq!(panel.form.auditors.shown_for, AuditAction::AddAuditors);
        assert_eq!(panel.form.ccs.shown_for, AuditAction::AddCcs);
        assert_eq!(panel.form.ccs.typeahead_uri, "/typeahead/common/mailable/");
        assert!(panel.form.auditors.on_demand);
    }

    #[test]
    fn custom_labels_are_used() {
        let panel = AuditPanel::load_with_labels(
            &source(),
            &Phid::new("C9"),
            &Phid::new("U1"),
            &PanelConfig::default(),
            &Shouting,
        )
        .unwrap();

        assert_eq!(panel.form.actions[0].label, "NONE");
    }
}
