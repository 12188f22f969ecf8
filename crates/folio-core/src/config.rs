//! Page configuration.
//!
//! Every tunable has a default matching the stock site. A page can override
//! any subset by embedding a JSON script element:
//!
//! ```html
//! <script type="application/json" id="folio-config">
//!   { "header_offset": 64, "log_filter": "folio=debug" }
//! </script>
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{FolioError, FolioResult};
use crate::page::Page;

/// Id of the optional JSON config element
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

/// Tunables for the page behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Height of the fixed header subtracted from smooth-scroll targets
    pub header_offset: f64,
    /// Lead applied to both section bands and the scroll probe
    pub section_probe_offset: f64,
    /// Scroll offset above which the navbar is elevated
    pub navbar_threshold: f64,
    /// Throttle window for scroll handlers
    pub throttle_ms: u64,
    /// Simulated network delay for form submission
    pub submit_delay_ms: u64,
    /// How long the success notice stays visible
    pub success_display_ms: u64,
    /// Viewport width at or below which the menu is the mobile drawer
    pub mobile_breakpoint: f64,
    /// Fraction of a card that must be visible before it fades in
    pub reveal_threshold: f64,
    /// Bottom root margin for the reveal observer (negative shrinks)
    pub reveal_bottom_margin: i32,
    /// Submit button label while a submission is pending
    pub pending_label: String,
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            header_offset: 80.0,
            section_probe_offset: 100.0,
            navbar_threshold: 50.0,
            throttle_ms: 100,
            submit_delay_ms: 1500,
            success_display_ms: 5000,
            mobile_breakpoint: 768.0,
            reveal_threshold: 0.1,
            reveal_bottom_margin: -50,
            pending_label: "Sending...".to_string(),
            log_filter: "info".to_string(),
        }
    }
}

impl PageConfig {
    /// Parse a config from JSON, filling missing keys with defaults.
    pub fn from_json(json: &str) -> FolioResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the page cannot work with.
    pub fn validate(&self) -> FolioResult<()> {
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(FolioError::Config(format!(
                "reveal_threshold must be within [0, 1], got {}",
                self.reveal_threshold
            )));
        }
        if self.throttle_ms == 0 {
            return Err(FolioError::Config("throttle_ms must be non-zero".into()));
        }
        if self.submit_delay_ms == 0 || self.success_display_ms == 0 {
            return Err(FolioError::Config(
                "submission delays must be non-zero".into(),
            ));
        }
        Ok(())
    }

    pub fn throttle_delay(&self) -> Duration {
        Duration::from_millis(self.throttle_ms)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn success_display(&self) -> Duration {
        Duration::from_millis(self.success_display_ms)
    }
}

/// Load the config embedded in the page, or defaults when there is none.
pub fn load_from_page<P: Page>(page: &P) -> FolioResult<PageConfig> {
    match page.element_by_id(CONFIG_ELEMENT_ID) {
        Some(node) => {
            let text = page.text(&node);
            if text.trim().is_empty() {
                return Ok(PageConfig::default());
            }
            PageConfig::from_json(&text)
        }
        None => Ok(PageConfig::default()),
    }
}

/// Fall back to defaults when a loaded config is unusable.
///
/// A bad config never stops the page; the failure is logged at `warn`.
pub fn or_default(loaded: FolioResult<PageConfig>) -> PageConfig {
    loaded.unwrap_or_else(|err| {
        warn!(error = %err, "Ignoring page config, using defaults");
        PageConfig::default()
    })
}

/// [`load_from_page`], falling back to defaults on any error.
pub fn load_or_default<P: Page>(page: &P) -> PageConfig {
    or_default(load_from_page(page))
}
