/// Install-wide settings that affect how the audit panel is presented.
///
/// Passed explicitly to [`AuditPanel::load`](crate::AuditPanel::load);
/// nothing in this crate reads global configuration.
///
/// # Examples
///
/// ```
/// use commit_audit::PanelConfig;
///
/// let config = PanelConfig::default().with_serious_business(false);
/// assert!(!config.serious_business());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelConfig {
    serious_business: bool,
    tokenizer_on_demand: bool,
}

impl PanelConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles plain wording for the form header and submit button.
    pub fn with_serious_business(mut self, enabled: bool) -> Self {
        self.serious_business = enabled;
        self
    }

    /// Toggles on-demand typeahead loading in the tokenizers.
    pub fn with_tokenizer_on_demand(mut self, enabled: bool) -> Self {
        self.tokenizer_on_demand = enabled;
        self
    }

    /// Returns true if plain wording is enabled.
    pub fn serious_business(&self) -> bool {
        self.serious_business
    }

    /// Returns true if typeahead results are loaded on demand.
    pub fn tokenizer_on_demand(&self) -> bool {
        self.tokenizer_on_demand
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            serious_business: true,
            tokenizer_on_demand: false,
        }
    }
}
