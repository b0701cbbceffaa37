//! Sondar: Rust-Native End-to-End Testing for Web Forms
//!
//! Sondar (Spanish: "to probe/sound out") drives a headless Chromium over
//! the Chrome DevTools Protocol and exposes Playwright-style locators,
//! auto-waiting actions, and polling `expect` assertions, so multi-step
//! form flows can be scripted as page objects in plain Rust.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    SONDAR Architecture                           │
//! ├─────────────────────────────────────────────────────────────────┤
//! │   ┌────────────┐    ┌────────────┐    ┌────────────┐            │
//! │   │ Page       │    │ Locators & │    │ Headless   │            │
//! │   │ Objects    │───►│ Expect     │───►│ Browser    │            │
//! │   │ (Rust)     │    │ Assertions │    │ (chromium) │            │
//! │   └────────────┘    └────────────┘    └────────────┘            │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! With the `browser` feature disabled, the [`Page`] backend records
//! commands instead of driving Chromium, so suites stay testable offline.

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]
// Allow large stack arrays/frames in tests (e.g., test data generation)
#![cfg_attr(test, allow(clippy::large_stack_arrays, clippy::large_stack_frames))]

/// Browser Lifecycle and Page Interaction
#[allow(
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::missing_const_for_fn,
    clippy::doc_markdown
)]
mod browser;

/// Fixture Management
#[allow(
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::missing_const_for_fn,
    clippy::doc_markdown
)]
mod fixture;

/// Locators, Selectors, and Expect Assertions
#[allow(
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::missing_const_for_fn,
    clippy::unnecessary_wraps,
    clippy::doc_markdown
)]
mod locator;

/// Page Object Model Support
#[allow(
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::missing_const_for_fn,
    clippy::doc_markdown
)]
mod page_object;

mod result;

/// Wait Mechanisms
#[allow(
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::missing_const_for_fn,
    clippy::doc_markdown
)]
pub mod wait;

#[cfg(not(feature = "browser"))]
pub use browser::MockCommand;
pub use browser::{Browser, BrowserConfig, Key, Page};
pub use fixture::{
    Fixture, FixtureBuilder, FixtureManager, FixtureScope, FixtureState, SimpleFixture,
};
pub use locator::{
    expect, AriaRole, ElementState, Expect, ExpectAssertion, Locator, LocatorAction,
    LocatorOptions, Selector, DEFAULT_POLL_INTERVAL_MS, DEFAULT_TIMEOUT_MS,
};
pub use page_object::{PageObject, PageObjectBuilder, SimplePageObject, UrlMatcher};
pub use result::{SondarError, SondarResult};
pub use wait::{
    wait_timeout, wait_until, LoadState, NavigationOptions, UrlPattern, WaitOptions, Waiter,
    DEFAULT_WAIT_TIMEOUT_MS, NETWORK_IDLE_THRESHOLD_MS,
};

/// Prelude for convenient imports
pub mod prelude {
    #[cfg(not(feature = "browser"))]
    pub use super::browser::MockCommand;
    pub use super::browser::{Browser, BrowserConfig, Key, Page};
    pub use super::fixture::{
        Fixture, FixtureBuilder, FixtureManager, FixtureScope, FixtureState, SimpleFixture,
    };
    pub use super::locator::{
        expect, AriaRole, ElementState, Expect, ExpectAssertion, Locator, LocatorAction,
        LocatorOptions, Selector, DEFAULT_POLL_INTERVAL_MS, DEFAULT_TIMEOUT_MS,
    };
    pub use super::page_object::{PageObject, PageObjectBuilder, SimplePageObject, UrlMatcher};
    pub use super::result::{SondarError, SondarResult};
    pub use super::wait::{
        wait_timeout, wait_until, LoadState, NavigationOptions, UrlPattern, WaitOptions, Waiter,
        DEFAULT_WAIT_TIMEOUT_MS, NETWORK_IDLE_THRESHOLD_MS,
    };
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_exposes_locator_api() {
        let locator = Locator::from_selector(Selector::role_named(AriaRole::Button, "Next"));
        let assertion = expect(locator).to_be_visible();
        assert!(assertion.requires_single_match());
    }

    #[test]
    fn test_prelude_exposes_page_object_api() {
        let page = PageObjectBuilder::new()
            .with_url_pattern("/register")
            .with_locator("heading", Selector::css("h1"))
            .build();
        assert_eq!(page.url_pattern(), "/register");
        assert!(UrlMatcher::new(page.url_pattern()).matches("/register"));
    }

    #[test]
    fn test_default_timeouts_are_distinct() {
        assert_eq!(DEFAULT_TIMEOUT_MS, 5000);
        assert_eq!(DEFAULT_WAIT_TIMEOUT_MS, 30_000);
    }
}
