//! Result and error types for sondar operations

use thiserror::Error;

/// Result type for sondar operations
pub type SondarResult<T> = Result<T, SondarError>;

/// Errors surfaced by browser automation, assertions, and fixtures
#[derive(Debug, Error)]
pub enum SondarError {
    /// Browser executable not found
    #[error("Browser not found. Install Chromium or set CHROMIUM_PATH")]
    BrowserNotFound,

    /// Browser failed to launch
    #[error("Browser launch failed: {message}")]
    BrowserLaunchError {
        /// Launch failure details
        message: String,
    },

    /// Page operation failed
    #[error("Page error: {message}")]
    PageError {
        /// Failure details
        message: String,
    },

    /// Navigation did not complete
    #[error("Navigation to {url} failed: {message}")]
    NavigationError {
        /// Target URL
        url: String,
        /// Failure details
        message: String,
    },

    /// Operation timed out
    #[error("Operation timed out after {ms}ms")]
    Timeout {
        /// Timeout in milliseconds
        ms: u64,
    },

    /// Script evaluation failed in the page
    #[error("Evaluation error: {message}")]
    EvaluationError {
        /// Failure details
        message: String,
    },

    /// Keyboard or element input failed
    #[error("Input error: {message}")]
    InputError {
        /// Failure details
        message: String,
    },

    /// Screenshot capture failed
    #[error("Screenshot error: {message}")]
    ScreenshotError {
        /// Failure details
        message: String,
    },

    /// A strict-mode locator resolved more than one element
    #[error("Strict mode violation: {query} resolved {count} elements")]
    StrictModeViolation {
        /// Human-readable locator description
        query: String,
        /// Number of elements the selector resolved
        count: usize,
    },

    /// An expectation was not met within its timeout
    #[error("Assertion failed: {message}")]
    AssertionError {
        /// Locator description, expectation, and timeout
        message: String,
    },

    /// Fixture setup or teardown failed
    #[error("Fixture error: {message}")]
    FixtureError {
        /// Fixture name and failure details
        message: String,
    },

    /// Operation not valid for the current backend or page state
    #[error("Invalid state: {message}")]
    InvalidState {
        /// Failure details
        message: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
