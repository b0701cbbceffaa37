//! Wait mechanics: load states, URL patterns, and cooperative polling
//!
//! All waiting in sondar is cooperative: a caller polls a condition at a
//! fixed interval until it holds or the timeout elapses. Nothing here spins
//! a background thread or retries an action after dispatch.

use crate::result::{SondarError, SondarResult};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

// =============================================================================
// CONSTANTS
// =============================================================================

/// Default timeout for navigation-level waits (30 seconds)
pub const DEFAULT_WAIT_TIMEOUT_MS: u64 = 30_000;

/// Default polling interval (50ms)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 50;

/// Network idle threshold (500ms without requests)
pub const NETWORK_IDLE_THRESHOLD_MS: u64 = 500;

// =============================================================================
// LOAD STATE
// =============================================================================

/// Page load states a navigation can wait for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadState {
    /// Wait for the `load` event to fire
    Load,
    /// Wait for the `DOMContentLoaded` event
    DomContentLoaded,
    /// Wait for the network to be idle (no requests for 500ms)
    NetworkIdle,
}

impl LoadState {
    /// JavaScript event name for this load state
    #[must_use]
    pub const fn event_name(&self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::DomContentLoaded => "DOMContentLoaded",
            Self::NetworkIdle => "networkidle",
        }
    }

    /// Whether a `document.readyState` value satisfies this load state
    #[must_use]
    pub fn ready_state_satisfied(&self, ready_state: &str) -> bool {
        match self {
            Self::Load | Self::NetworkIdle => ready_state == "complete",
            Self::DomContentLoaded => {
                ready_state == "interactive" || ready_state == "complete"
            }
        }
    }

    /// Default timeout for this load state
    #[must_use]
    pub const fn default_timeout_ms(&self) -> u64 {
        match self {
            Self::Load | Self::DomContentLoaded => 30_000,
            Self::NetworkIdle => 60_000,
        }
    }
}

impl Default for LoadState {
    fn default() -> Self {
        Self::Load
    }
}

impl std::fmt::Display for LoadState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.event_name())
    }
}

// =============================================================================
// URL PATTERNS
// =============================================================================

/// Pattern for matching page URLs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UrlPattern {
    /// Exact URL match
    Exact(String),
    /// Prefix match
    Prefix(String),
    /// Contains substring
    Contains(String),
    /// Regex match
    Regex(String),
    /// Match any URL
    Any,
}

impl UrlPattern {
    /// Check if a URL matches this pattern
    #[must_use]
    pub fn matches(&self, url: &str) -> bool {
        match self {
            Self::Exact(pattern) => url == pattern,
            Self::Prefix(pattern) => url.starts_with(pattern),
            Self::Contains(pattern) => url.contains(pattern),
            Self::Regex(pattern) => regex::Regex::new(pattern)
                .map(|re| re.is_match(url))
                .unwrap_or(false),
            Self::Any => true,
        }
    }
}

// =============================================================================
// WAIT OPTIONS
// =============================================================================

/// Options for wait operations
#[derive(Debug, Clone)]
pub struct WaitOptions {
    /// Timeout in milliseconds
    pub timeout_ms: u64,
    /// Polling interval in milliseconds
    pub poll_interval_ms: u64,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_WAIT_TIMEOUT_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl WaitOptions {
    /// Create new wait options with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set timeout in milliseconds
    #[must_use]
    pub const fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Set polling interval in milliseconds
    #[must_use]
    pub const fn with_poll_interval(mut self, poll_interval_ms: u64) -> Self {
        self.poll_interval_ms = poll_interval_ms;
        self
    }

    /// Get timeout as Duration
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Get poll interval as Duration
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

// =============================================================================
// NAVIGATION OPTIONS
// =============================================================================

/// Options for navigation waits
#[derive(Debug, Clone)]
pub struct NavigationOptions {
    /// Timeout in milliseconds
    pub timeout_ms: u64,
    /// Load state to wait for
    pub wait_until: LoadState,
    /// URL pattern the landed page must match (optional)
    pub url_pattern: Option<UrlPattern>,
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_WAIT_TIMEOUT_MS,
            wait_until: LoadState::Load,
            url_pattern: None,
        }
    }
}

impl NavigationOptions {
    /// Create new navigation options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Set load state
    #[must_use]
    pub const fn with_wait_until(mut self, state: LoadState) -> Self {
        self.wait_until = state;
        self
    }

    /// Set URL pattern
    #[must_use]
    pub fn with_url(mut self, pattern: UrlPattern) -> Self {
        self.url_pattern = Some(pattern);
        self
    }
}

// =============================================================================
// WAITER
// =============================================================================

/// Synchronous page-state tracker with polling waits.
///
/// The mock browser backend drives one of these; the CDP backend polls
/// `document.readyState` in the page directly instead.
#[derive(Debug, Clone, Default)]
pub struct Waiter {
    current_url: Option<String>,
    load_state: LoadState,
    pending_requests: usize,
    last_network_activity: Option<Instant>,
}

impl Waiter {
    /// Create a new waiter
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the current URL
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.current_url = Some(url.into());
    }

    /// Set the current load state
    pub fn set_load_state(&mut self, state: LoadState) {
        self.load_state = state;
    }

    /// Update the pending request count
    pub fn set_pending_requests(&mut self, count: usize) {
        self.pending_requests = count;
        if count > 0 {
            self.last_network_activity = Some(Instant::now());
        }
    }

    /// The URL last recorded, if any
    #[must_use]
    pub fn current_url(&self) -> Option<&str> {
        self.current_url.as_deref()
    }

    /// Wait until the recorded URL matches `pattern`
    pub fn wait_for_url(&self, pattern: &UrlPattern, options: &WaitOptions) -> SondarResult<()> {
        let start = Instant::now();
        while start.elapsed() < options.timeout() {
            if let Some(ref url) = self.current_url {
                if pattern.matches(url) {
                    return Ok(());
                }
            }
            std::thread::sleep(options.poll_interval());
        }
        Err(SondarError::Timeout {
            ms: options.timeout_ms,
        })
    }

    /// Wait until the recorded load state satisfies `state`
    pub fn wait_for_load_state(
        &self,
        state: LoadState,
        options: &WaitOptions,
    ) -> SondarResult<()> {
        let start = Instant::now();
        while start.elapsed() < options.timeout() {
            let reached = match state {
                LoadState::Load => self.load_state == LoadState::Load,
                LoadState::DomContentLoaded => {
                    self.load_state == LoadState::DomContentLoaded
                        || self.load_state == LoadState::Load
                }
                LoadState::NetworkIdle => self.is_network_idle(),
            };
            if reached {
                return Ok(());
            }
            std::thread::sleep(options.poll_interval());
        }
        Err(SondarError::Timeout {
            ms: options.timeout_ms,
        })
    }

    /// Wait for a navigation described by `options` to complete
    pub fn wait_for_navigation(&self, options: &NavigationOptions) -> SondarResult<()> {
        let wait_options = WaitOptions::new().with_timeout(options.timeout_ms);
        if let Some(ref pattern) = options.url_pattern {
            self.wait_for_url(pattern, &wait_options)?;
        }
        self.wait_for_load_state(options.wait_until, &wait_options)
    }

    /// Whether no request is pending and the idle threshold has elapsed
    #[must_use]
    pub fn is_network_idle(&self) -> bool {
        if self.pending_requests > 0 {
            return false;
        }
        match self.last_network_activity {
            Some(last) => last.elapsed() >= Duration::from_millis(NETWORK_IDLE_THRESHOLD_MS),
            None => true,
        }
    }

    /// Wait until `predicate` returns true
    pub fn wait_for_function<F>(&self, predicate: F, options: &WaitOptions) -> SondarResult<()>
    where
        F: Fn() -> bool,
    {
        let start = Instant::now();
        while start.elapsed() < options.timeout() {
            if predicate() {
                return Ok(());
            }
            std::thread::sleep(options.poll_interval());
        }
        Err(SondarError::Timeout {
            ms: options.timeout_ms,
        })
    }
}

// =============================================================================
// CONVENIENCE FUNCTIONS
// =============================================================================

/// Wait for a condition with default polling
pub fn wait_until<F>(predicate: F, timeout_ms: u64) -> SondarResult<()>
where
    F: Fn() -> bool,
{
    let waiter = Waiter::new();
    let options = WaitOptions::new().with_timeout(timeout_ms);
    waiter.wait_for_function(predicate, &options)
}

/// Wait for a fixed duration (discouraged - use wait conditions instead)
pub fn wait_timeout(duration_ms: u64) {
    std::thread::sleep(Duration::from_millis(duration_ms));
}

// =============================================================================
// TESTS
// =============================================================================
