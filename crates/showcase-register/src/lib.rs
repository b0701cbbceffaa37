//! Showcase Register - E2E Suite for a Multi-Step Registration Form
//!
//! This crate demonstrates driving a real registration form with Sondar:
//! a page object for every element of the details step, shared input
//! fixtures, and scenario functions covering field visibility, each
//! validation rule, the submission gate, and the happy path through to
//! the following page.
//!
//! Compiled without the `browser` feature the suite still type-checks
//! and its page-object layout, test data, and command-log wiring are
//! testable offline; the live scenarios need `--features browser`, a
//! Chromium install, and network access to the target site.
//!
//! # Example
//!
//! ```rust
//! use showcase_register::pages::RegisterPage;
//! use sondar::PageObject;
//!
//! let register = RegisterPage::new();
//! assert_eq!(register.url_pattern(), "https://shoptimised.co/register");
//! assert!(register.next_button.description().contains("Next"));
//! ```

// Allow common test patterns in this showcase crate
#![cfg_attr(
    test,
    allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod data;
pub mod pages;

/// Live-browser scenario functions; each one drives a complete flow
#[cfg(feature = "browser")]
pub mod scenarios;

/// The suite's tracing setup as a reusable fixture.
///
/// Respects `RUST_LOG`, defaults to `info`, and tolerates repeated
/// setup; only the first installation takes effect.
#[must_use]
pub fn tracing_fixture() -> sondar::SimpleFixture {
    sondar::SimpleFixture::new("tracing").with_setup(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_test_writer()
            .try_init();
        Ok(())
    })
}

/// Install the suite's tracing subscriber.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_tracing() {
    let mut fixtures = sondar::FixtureManager::new();
    fixtures.register(tracing_fixture());
    // the setup closure swallows the already-installed case, so this
    // cannot fail
    let _ = fixtures.setup_all();
}
