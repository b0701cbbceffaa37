//! Browser control over the Chrome DevTools Protocol
//!
//! When compiled with the `browser` feature, this module drives a real
//! Chromium instance via chromiumoxide. Without the feature it provides a
//! synchronous mock backend that records every dispatched command, so page
//! objects and scenario wiring can be tested with no browser installed.
//!
//! Actions auto-wait: before dispatching, the target locator's state is
//! polled until an element exists (and is visible, when the locator requires
//! it) within the locator timeout. No action retries itself after dispatch;
//! assertion-level polling belongs to [`Page::verify`].

use crate::result::{SondarError, SondarResult};
use serde::{Deserialize, Serialize};

/// Browser configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Run in headless mode
    pub headless: bool,
    /// Viewport width
    pub viewport_width: u32,
    /// Viewport height
    pub viewport_height: u32,
    /// Path to chromium binary (None = auto-detect, honoring CHROMIUM_PATH)
    pub chromium_path: Option<String>,
    /// Remote debugging port (0 = auto-assign)
    pub debug_port: u16,
    /// User agent string
    pub user_agent: Option<String>,
    /// Open `DevTools` for every tab
    pub devtools: bool,
    /// Sandbox mode (disable for containers)
    pub sandbox: bool,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            viewport_width: 1280,
            viewport_height: 800,
            chromium_path: None,
            debug_port: 0,
            user_agent: None,
            devtools: false,
            sandbox: true,
        }
    }
}

impl BrowserConfig {
    /// Set viewport dimensions
    #[must_use]
    pub const fn with_viewport(mut self, width: u32, height: u32) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }

    /// Set headless mode
    #[must_use]
    pub const fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Set chromium path
    #[must_use]
    pub fn with_chromium_path(mut self, path: impl Into<String>) -> Self {
        self.chromium_path = Some(path.into());
        self
    }

    /// Set the remote debugging port
    #[must_use]
    pub const fn with_debug_port(mut self, port: u16) -> Self {
        self.debug_port = port;
        self
    }

    /// Set user agent
    #[must_use]
    pub fn with_user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Open `DevTools` for every tab
    #[must_use]
    pub const fn with_devtools(mut self) -> Self {
        self.devtools = true;
        self
    }

    /// Disable sandbox (for containers/CI)
    #[must_use]
    pub const fn with_no_sandbox(mut self) -> Self {
        self.sandbox = false;
        self
    }
}

// ============================================================================
// KEYS
// ============================================================================

/// Keyboard keys dispatched as real CDP input events.
///
/// Native `<select>` elements ignore synthetic pointer clicks on their
/// options; ArrowDown/Enter key events are the reliable way to drive them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Down arrow
    ArrowDown,
    /// Up arrow
    ArrowUp,
    /// Enter / Return
    Enter,
    /// Tab
    Tab,
    /// Escape
    Escape,
}

impl Key {
    /// DOM `key` value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ArrowDown => "ArrowDown",
            Self::ArrowUp => "ArrowUp",
            Self::Enter => "Enter",
            Self::Tab => "Tab",
            Self::Escape => "Escape",
        }
    }

    /// DOM `code` value
    #[must_use]
    pub const fn code(self) -> &'static str {
        self.as_str()
    }

    /// Windows virtual key code, as CDP expects it
    #[must_use]
    pub const fn key_code(self) -> i64 {
        match self {
            Self::ArrowDown => 40,
            Self::ArrowUp => 38,
            Self::Enter => 13,
            Self::Tab => 9,
            Self::Escape => 27,
        }
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Real CDP Implementation (when `browser` feature is enabled)
// ============================================================================

#[cfg(feature = "browser")]
#[allow(
    clippy::wildcard_imports,
    clippy::significant_drop_tightening,
    clippy::missing_errors_doc,
    clippy::items_after_statements,
    clippy::similar_names
)]
mod cdp {
    use super::*;
    use crate::locator::{ActionOutcome, ElementState, ExpectAssertion, Locator, LocatorAction};
    use crate::wait::{LoadState, NavigationOptions, UrlPattern, DEFAULT_POLL_INTERVAL_MS};
    use chromiumoxide::browser::{Browser as CdpBrowser, BrowserConfig as CdpConfig};
    use chromiumoxide::cdp::browser_protocol::input::{
        DispatchKeyEventParams, DispatchKeyEventType,
    };
    use chromiumoxide::cdp::browser_protocol::page::{
        CaptureScreenshotFormat, CaptureScreenshotParams,
    };
    use chromiumoxide::page::Page as CdpPage;
    use futures::StreamExt;
    use std::sync::Arc;
    use std::time::{Duration, Instant};
    use tokio::sync::Mutex;

    /// Browser instance with real CDP connection
    #[derive(Debug)]
    pub struct Browser {
        config: BrowserConfig,
        inner: Arc<Mutex<CdpBrowser>>,
        #[allow(dead_code)]
        handle: tokio::task::JoinHandle<()>,
    }

    impl Browser {
        /// Launch a new browser instance with real CDP
        ///
        /// # Errors
        ///
        /// Returns error if browser cannot be launched
        pub async fn launch(config: BrowserConfig) -> SondarResult<Self> {
            let mut builder =
                CdpConfig::builder().window_size(config.viewport_width, config.viewport_height);

            if !config.headless {
                builder = builder.with_head();
            }

            if !config.sandbox {
                builder = builder.no_sandbox();
            }

            if let Some(ref path) = config.chromium_path {
                builder = builder.chrome_executable(path);
            } else if let Ok(path) = std::env::var("CHROMIUM_PATH") {
                builder = builder.chrome_executable(path);
            }

            if config.debug_port != 0 {
                builder = builder.port(config.debug_port);
            }

            if let Some(ref ua) = config.user_agent {
                builder = builder.arg(format!("--user-agent={ua}"));
            }

            if config.devtools {
                builder = builder.arg("--auto-open-devtools-for-tabs");
            }

            let cdp_config = builder
                .build()
                .map_err(|e| SondarError::BrowserLaunchError { message: e })?;

            let (browser, mut handler) = CdpBrowser::launch(cdp_config).await.map_err(|e| {
                SondarError::BrowserLaunchError {
                    message: e.to_string(),
                }
            })?;

            tracing::debug!(headless = config.headless, "browser launched");

            // Spawn handler task
            let handle = tokio::spawn(async move {
                while let Some(h) = handler.next().await {
                    if h.is_err() {
                        break;
                    }
                }
            });

            Ok(Self {
                config,
                inner: Arc::new(Mutex::new(browser)),
                handle,
            })
        }

        /// Create a new page
        ///
        /// # Errors
        ///
        /// Returns error if page cannot be created
        pub async fn new_page(&self) -> SondarResult<Page> {
            let browser = self.inner.lock().await;
            let cdp_page =
                browser
                    .new_page("about:blank")
                    .await
                    .map_err(|e| SondarError::PageError {
                        message: e.to_string(),
                    })?;

            Ok(Page {
                url: String::from("about:blank"),
                inner: Arc::new(Mutex::new(cdp_page)),
            })
        }

        /// Get the browser configuration
        #[must_use]
        pub const fn config(&self) -> &BrowserConfig {
            &self.config
        }

        /// Close the browser
        pub async fn close(self) -> SondarResult<()> {
            let mut browser = self.inner.lock().await;
            browser
                .close()
                .await
                .map_err(|e| SondarError::BrowserLaunchError {
                    message: e.to_string(),
                })?;
            Ok(())
        }
    }

    /// A browser page with real CDP connection
    #[derive(Debug)]
    pub struct Page {
        /// Last URL navigated to
        url: String,
        inner: Arc<Mutex<CdpPage>>,
    }

    impl Page {
        /// Navigate to a URL
        ///
        /// # Errors
        ///
        /// Returns [`SondarError::NavigationError`] if navigation fails
        pub async fn goto(&mut self, url: &str) -> SondarResult<()> {
            tracing::debug!(url, "navigating");
            {
                let page = self.inner.lock().await;
                page.goto(url)
                    .await
                    .map_err(|e| SondarError::NavigationError {
                        url: url.to_string(),
                        message: e.to_string(),
                    })?;
            }
            self.url = url.to_string();
            Ok(())
        }

        /// Navigate and wait for the load state (and optional URL pattern)
        /// the options describe
        pub async fn goto_with(
            &mut self,
            url: &str,
            options: &NavigationOptions,
        ) -> SondarResult<()> {
            self.goto(url).await?;
            self.wait_for_load_state(options.wait_until, options.timeout_ms)
                .await?;
            if let Some(ref pattern) = options.url_pattern {
                self.wait_for_url(pattern, options.timeout_ms).await?;
            }
            Ok(())
        }

        /// Evaluate a JavaScript expression in the page
        ///
        /// # Errors
        ///
        /// Returns [`SondarError::EvaluationError`] if evaluation or
        /// deserialization fails
        pub async fn eval<T: serde::de::DeserializeOwned>(&self, expr: &str) -> SondarResult<T> {
            let page = self.inner.lock().await;
            let result = page
                .evaluate(expr)
                .await
                .map_err(|e| SondarError::EvaluationError {
                    message: e.to_string(),
                })?;
            result
                .into_value()
                .map_err(|e| SondarError::EvaluationError {
                    message: e.to_string(),
                })
        }

        /// Snapshot a locator's element state
        pub async fn state(&self, locator: &Locator) -> SondarResult<ElementState> {
            self.eval(&locator.state_query()).await
        }

        /// Number of elements the locator resolves
        pub async fn count(&self, locator: &Locator) -> SondarResult<usize> {
            self.eval(&locator.count_query()).await
        }

        /// Whether the locator's first match is visible
        pub async fn is_visible(&self, locator: &Locator) -> SondarResult<bool> {
            let state = self.state(locator).await?;
            Ok(state.count > 0 && state.visible)
        }

        /// Whether the locator matches nothing, or an invisible element
        pub async fn is_hidden(&self, locator: &Locator) -> SondarResult<bool> {
            let state = self.state(locator).await?;
            Ok(state.count == 0 || !state.visible)
        }

        /// Normalized text content of the first match
        pub async fn text_content(&self, locator: &Locator) -> SondarResult<Option<String>> {
            Ok(self.state(locator).await?.text)
        }

        /// Form value of the first match
        pub async fn input_value(&self, locator: &Locator) -> SondarResult<Option<String>> {
            Ok(self.state(locator).await?.value)
        }

        /// Checked state of the first match
        pub async fn is_checked(&self, locator: &Locator) -> SondarResult<bool> {
            Ok(self.state(locator).await?.checked)
        }

        /// Poll until the locator is actionable: at least one match, visible
        /// when the locator requires it, and a single match in strict mode.
        async fn wait_for_actionable(&self, locator: &Locator) -> SondarResult<ElementState> {
            let options = *locator.options();
            let start = Instant::now();
            let mut state = self.state(locator).await?;
            loop {
                if state.count > 1 && options.strict {
                    return Err(SondarError::StrictModeViolation {
                        query: locator.description(),
                        count: state.count,
                    });
                }
                if state.count > 0 && (!options.visible || state.visible) {
                    return Ok(state);
                }
                if start.elapsed() >= options.timeout {
                    return Err(SondarError::Timeout {
                        ms: options.timeout.as_millis() as u64,
                    });
                }
                tokio::time::sleep(options.poll_interval).await;
                state = self.state(locator).await?;
            }
        }

        /// Run an element interaction, auto-waiting for actionability first
        pub async fn run(&self, action: &LocatorAction) -> SondarResult<()> {
            self.wait_for_actionable(action.locator()).await?;
            tracing::debug!(target = %action.locator().description(), "dispatching action");
            let outcome: ActionOutcome = self.eval(&action.script()).await?;
            if outcome.ok {
                Ok(())
            } else {
                Err(SondarError::InputError {
                    message: format!(
                        "{}: {}",
                        action.locator().description(),
                        outcome.error.unwrap_or_else(|| String::from("action failed"))
                    ),
                })
            }
        }

        /// Click the locator's first match
        pub async fn click(&self, locator: &Locator) -> SondarResult<()> {
            self.run(&locator.click()).await
        }

        /// Replace the first match's value
        pub async fn fill(&self, locator: &Locator, value: &str) -> SondarResult<()> {
            self.run(&locator.fill(value)).await
        }

        /// Empty the first match's value
        pub async fn clear(&self, locator: &Locator) -> SondarResult<()> {
            self.run(&locator.clear()).await
        }

        /// Check a checkbox
        pub async fn check(&self, locator: &Locator) -> SondarResult<()> {
            self.run(&locator.set_checked(true)).await
        }

        /// Uncheck a checkbox
        pub async fn uncheck(&self, locator: &Locator) -> SondarResult<()> {
            self.run(&locator.set_checked(false)).await
        }

        /// Select a dropdown option by label or value
        pub async fn select_option(&self, locator: &Locator, label: &str) -> SondarResult<()> {
            self.run(&locator.select_option(label)).await
        }

        /// Focus the locator and dispatch a real key-down/key-up pair.
        ///
        /// Used for keyboard-driven `<select>` navigation where synthetic
        /// pointer clicks on options do not register.
        pub async fn press(&self, locator: &Locator, key: Key) -> SondarResult<()> {
            self.wait_for_actionable(locator).await?;
            let outcome: ActionOutcome = self.eval(&locator.focus().script()).await?;
            if !outcome.ok {
                return Err(SondarError::InputError {
                    message: format!(
                        "{}: {}",
                        locator.description(),
                        outcome.error.unwrap_or_else(|| String::from("focus failed"))
                    ),
                });
            }

            tracing::debug!(target = %locator.description(), key = %key, "dispatching key");
            let page = self.inner.lock().await;
            for event_type in [DispatchKeyEventType::KeyDown, DispatchKeyEventType::KeyUp] {
                let params = DispatchKeyEventParams::builder()
                    .r#type(event_type)
                    .key(key.as_str())
                    .code(key.code())
                    .windows_virtual_key_code(key.key_code())
                    .native_virtual_key_code(key.key_code())
                    .build()
                    .map_err(|e| SondarError::InputError { message: e })?;
                page.execute(params)
                    .await
                    .map_err(|e| SondarError::InputError {
                        message: e.to_string(),
                    })?;
            }
            Ok(())
        }

        /// Poll the page until the expectation holds, failing with the
        /// locator description, expectation, and timeout otherwise
        pub async fn verify(&self, assertion: &ExpectAssertion) -> SondarResult<()> {
            let locator = assertion.locator();
            let options = *locator.options();
            let start = Instant::now();
            loop {
                let state = self.state(locator).await?;
                if state.count > 1 && options.strict && assertion.requires_single_match() {
                    return Err(SondarError::StrictModeViolation {
                        query: locator.description(),
                        count: state.count,
                    });
                }
                if assertion.check_state(&state) {
                    tracing::trace!(
                        target = %locator.description(),
                        expectation = %assertion.expectation(),
                        "assertion satisfied"
                    );
                    return Ok(());
                }
                if start.elapsed() >= options.timeout {
                    return Err(SondarError::AssertionError {
                        message: format!(
                            "{} {} not satisfied within {}ms",
                            locator.description(),
                            assertion.expectation(),
                            options.timeout.as_millis()
                        ),
                    });
                }
                tokio::time::sleep(options.poll_interval).await;
            }
        }

        /// Poll `document.readyState` until it satisfies `state`
        pub async fn wait_for_load_state(
            &self,
            state: LoadState,
            timeout_ms: u64,
        ) -> SondarResult<()> {
            let start = Instant::now();
            loop {
                let ready_state: String = self.eval("document.readyState").await?;
                if state.ready_state_satisfied(&ready_state) {
                    return Ok(());
                }
                if start.elapsed() >= Duration::from_millis(timeout_ms) {
                    return Err(SondarError::Timeout { ms: timeout_ms });
                }
                tokio::time::sleep(Duration::from_millis(DEFAULT_POLL_INTERVAL_MS)).await;
            }
        }

        /// Poll the live URL until it matches `pattern`
        pub async fn wait_for_url(
            &self,
            pattern: &UrlPattern,
            timeout_ms: u64,
        ) -> SondarResult<()> {
            let start = Instant::now();
            loop {
                let url = self.current_url().await?;
                if pattern.matches(&url) {
                    return Ok(());
                }
                if start.elapsed() >= Duration::from_millis(timeout_ms) {
                    return Err(SondarError::Timeout { ms: timeout_ms });
                }
                tokio::time::sleep(Duration::from_millis(DEFAULT_POLL_INTERVAL_MS)).await;
            }
        }

        /// The page's live URL
        pub async fn current_url(&self) -> SondarResult<String> {
            self.eval("window.location.href").await
        }

        /// Take a PNG screenshot
        ///
        /// # Errors
        ///
        /// Returns [`SondarError::ScreenshotError`] if capture fails
        pub async fn screenshot(&self) -> SondarResult<Vec<u8>> {
            let page = self.inner.lock().await;
            let params = CaptureScreenshotParams::builder()
                .format(CaptureScreenshotFormat::Png)
                .build();

            let screenshot =
                page.execute(params)
                    .await
                    .map_err(|e| SondarError::ScreenshotError {
                        message: e.to_string(),
                    })?;

            use base64::Engine;
            base64::engine::general_purpose::STANDARD
                .decode(&screenshot.data)
                .map_err(|e| SondarError::ScreenshotError {
                    message: e.to_string(),
                })
        }
    }
}

// ============================================================================
// Mock Implementation (when `browser` feature is NOT enabled)
// ============================================================================

#[cfg(not(feature = "browser"))]
#[allow(clippy::missing_const_for_fn)]
mod mock {
    use super::{BrowserConfig, Key, SondarError, SondarResult};
    use crate::locator::{ExpectAssertion, Locator};
    use crate::wait::{LoadState, UrlPattern, WaitOptions, Waiter};

    /// Command recorded by the mock page
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum MockCommand {
        /// Navigation to a URL
        Navigate(String),
        /// Click on a locator (description)
        Click(String),
        /// Fill a locator with a value
        Fill {
            /// Target locator description
            locator: String,
            /// Value filled
            value: String,
        },
        /// Clear a locator's value
        Clear(String),
        /// Drive a checkbox to a state
        SetChecked {
            /// Target locator description
            locator: String,
            /// Target state
            checked: bool,
        },
        /// Select a dropdown option
        SelectOption {
            /// Target locator description
            locator: String,
            /// Option label or value
            label: String,
        },
        /// Key press on a locator
        Press {
            /// Target locator description
            locator: String,
            /// Key pressed
            key: Key,
        },
    }

    /// Browser instance for testing (mock when `browser` feature disabled)
    #[derive(Debug)]
    pub struct Browser {
        config: BrowserConfig,
    }

    impl Browser {
        /// Launch a new browser instance (mock)
        ///
        /// # Errors
        ///
        /// Returns error if browser cannot be launched
        pub fn launch(config: BrowserConfig) -> SondarResult<Self> {
            Ok(Self { config })
        }

        /// Create a new page
        ///
        /// # Errors
        ///
        /// Returns error if page cannot be created
        pub fn new_page(&self) -> SondarResult<Page> {
            Ok(Page::new())
        }

        /// Get the browser configuration
        #[must_use]
        pub const fn config(&self) -> &BrowserConfig {
            &self.config
        }

        /// Close the browser (mock does nothing)
        pub fn close(self) -> SondarResult<()> {
            Ok(())
        }
    }

    /// A browser page recording dispatched commands (mock backend)
    #[derive(Debug, Default)]
    pub struct Page {
        url: String,
        commands: Vec<MockCommand>,
        waiter: Waiter,
    }

    impl Page {
        /// Create a new mock page
        #[must_use]
        pub fn new() -> Self {
            let mut waiter = Waiter::new();
            waiter.set_url("about:blank");
            Self {
                url: String::from("about:blank"),
                commands: Vec::new(),
                waiter,
            }
        }

        /// Navigate to a URL
        ///
        /// # Errors
        ///
        /// Returns error if navigation fails
        pub fn goto(&mut self, url: &str) -> SondarResult<()> {
            self.commands.push(MockCommand::Navigate(url.to_string()));
            self.url = url.to_string();
            self.waiter.set_url(url);
            self.waiter.set_load_state(LoadState::Load);
            Ok(())
        }

        /// Wait until the recorded load state satisfies `state`
        ///
        /// # Errors
        ///
        /// Returns [`SondarError::Timeout`] if the state is not reached
        pub fn wait_for_load_state(&self, state: LoadState, timeout_ms: u64) -> SondarResult<()> {
            self.waiter
                .wait_for_load_state(state, &WaitOptions::new().with_timeout(timeout_ms))
        }

        /// Wait until the recorded URL matches `pattern`
        ///
        /// # Errors
        ///
        /// Returns [`SondarError::Timeout`] if no recorded URL matches
        pub fn wait_for_url(&self, pattern: &UrlPattern, timeout_ms: u64) -> SondarResult<()> {
            self.waiter
                .wait_for_url(pattern, &WaitOptions::new().with_timeout(timeout_ms))
        }

        /// Click the locator's first match
        pub fn click(&mut self, locator: &Locator) -> SondarResult<()> {
            self.commands.push(MockCommand::Click(locator.description()));
            Ok(())
        }

        /// Replace the first match's value
        pub fn fill(&mut self, locator: &Locator, value: &str) -> SondarResult<()> {
            self.commands.push(MockCommand::Fill {
                locator: locator.description(),
                value: value.to_string(),
            });
            Ok(())
        }

        /// Empty the first match's value
        pub fn clear(&mut self, locator: &Locator) -> SondarResult<()> {
            self.commands.push(MockCommand::Clear(locator.description()));
            Ok(())
        }

        /// Check a checkbox
        pub fn check(&mut self, locator: &Locator) -> SondarResult<()> {
            self.commands.push(MockCommand::SetChecked {
                locator: locator.description(),
                checked: true,
            });
            Ok(())
        }

        /// Uncheck a checkbox
        pub fn uncheck(&mut self, locator: &Locator) -> SondarResult<()> {
            self.commands.push(MockCommand::SetChecked {
                locator: locator.description(),
                checked: false,
            });
            Ok(())
        }

        /// Select a dropdown option by label or value
        pub fn select_option(&mut self, locator: &Locator, label: &str) -> SondarResult<()> {
            self.commands.push(MockCommand::SelectOption {
                locator: locator.description(),
                label: label.to_string(),
            });
            Ok(())
        }

        /// Record a key press on a locator
        pub fn press(&mut self, locator: &Locator, key: Key) -> SondarResult<()> {
            self.commands.push(MockCommand::Press {
                locator: locator.description(),
                key,
            });
            Ok(())
        }

        /// Verify an expectation (no document exists in mock mode)
        ///
        /// # Errors
        ///
        /// Always returns [`SondarError::InvalidState`]
        pub fn verify(&self, assertion: &ExpectAssertion) -> SondarResult<()> {
            Err(SondarError::InvalidState {
                message: format!(
                    "cannot verify {} {}: no document without the 'browser' feature",
                    assertion.locator().description(),
                    assertion.expectation()
                ),
            })
        }

        /// Get current URL
        #[must_use]
        pub fn current_url(&self) -> &str {
            &self.url
        }

        /// Commands dispatched so far, in order
        #[must_use]
        pub fn commands(&self) -> &[MockCommand] {
            &self.commands
        }

        /// Number of commands dispatched
        #[must_use]
        pub fn command_count(&self) -> usize {
            self.commands.len()
        }
    }
}

// Re-export based on feature
#[cfg(feature = "browser")]
pub use cdp::{Browser, Page};

#[cfg(not(feature = "browser"))]
pub use mock::{Browser, MockCommand, Page};
