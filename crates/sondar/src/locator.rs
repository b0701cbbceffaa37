//! Locators: deferred element references resolved in the browser
//!
//! A [`Locator`] pairs a [`Selector`] with resolution options. Nothing is
//! looked up until an action or assertion runs; the selector is serialized
//! to a JSON descriptor and interpreted inside the page by an embedded
//! query runtime, so role, accessible-name, and text matching follow the
//! same rules on every backend.

use crate::result::{SondarError, SondarResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Default timeout for actions and assertions (milliseconds)
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Default polling interval while waiting for element state (milliseconds)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 50;

// ============================================================================
// QUERY RUNTIME
// ============================================================================

/// JS fragment interpreting a selector descriptor against the live DOM.
///
/// Text and accessible-name matching are whitespace-normalized; non-exact
/// matching is a case-insensitive substring search, exact matching compares
/// the full normalized string.
const QUERY_RUNTIME: &str = r"
const __norm = t => (t || '').replace(/\s+/g, ' ').trim();
const __textMatch = (actual, wanted, exact) => {
  const hay = __norm(actual);
  return exact ? hay === wanted : hay.toLowerCase().includes(String(wanted).toLowerCase());
};
const __implicitRole = el => {
  const tag = el.tagName.toLowerCase();
  if (tag === 'button') return 'button';
  if (tag === 'a') return el.hasAttribute('href') ? 'link' : null;
  if (/^h[1-6]$/.test(tag)) return 'heading';
  if (tag === 'option') return 'option';
  if (tag === 'select') return el.multiple || el.size > 1 ? 'listbox' : 'combobox';
  if (tag === 'textarea') return 'textbox';
  if (tag === 'input') {
    const type = (el.getAttribute('type') || 'text').toLowerCase();
    if (type === 'checkbox') return 'checkbox';
    if (type === 'radio') return 'radio';
    if (type === 'button' || type === 'submit' || type === 'reset') return 'button';
    if (type === 'hidden') return null;
    return 'textbox';
  }
  return null;
};
const __role = el => el.getAttribute('role') || __implicitRole(el);
const __accName = el => {
  const aria = el.getAttribute('aria-label');
  if (aria) return __norm(aria);
  const refs = el.getAttribute('aria-labelledby');
  if (refs) {
    const joined = refs.split(/\s+/).map(id => {
      const target = document.getElementById(id);
      return target ? target.textContent : '';
    }).join(' ');
    return __norm(joined);
  }
  if (el.labels && el.labels.length > 0) {
    return __norm(Array.from(el.labels).map(l => l.textContent).join(' '));
  }
  const wrapping = el.closest ? el.closest('label') : null;
  if (wrapping) return __norm(wrapping.textContent);
  const alt = el.getAttribute('alt');
  if (alt) return __norm(alt);
  return __norm(el.textContent);
};
const __visible = el => {
  if (!el || !el.isConnected) return false;
  const style = getComputedStyle(el);
  if (style.display === 'none' || style.visibility === 'hidden') return false;
  const rect = el.getBoundingClientRect();
  return rect.width > 0 && rect.height > 0;
};
const __resolve = (desc, root) => {
  if (!desc) return [];
  if (desc.kind === 'css') return Array.from(root.querySelectorAll(desc.css));
  if (desc.kind === 'text') {
    const hits = Array.from(root.querySelectorAll('*'))
      .filter(el => __textMatch(el.textContent, desc.text, desc.exact));
    return hits.filter(el => !hits.some(other => other !== el && el.contains(other)));
  }
  if (desc.kind === 'role') {
    let els = Array.from(root.querySelectorAll('*')).filter(el => __role(el) === desc.role);
    if (desc.name !== null && desc.name !== undefined) {
      els = els.filter(el => __textMatch(__accName(el), desc.name, desc.exact));
    }
    return els;
  }
  if (desc.kind === 'within') {
    return __resolve(desc.outer, root).flatMap(el => __resolve(desc.inner, el));
  }
  if (desc.kind === 'nth') {
    const els = __resolve(desc.base, root);
    return desc.index < els.length ? [els[desc.index]] : [];
  }
  return [];
};
";

const COUNT_BODY: &str = "return els.length;";

const STATE_BODY: &str = "const el = els[0] || null;
return {
  count: els.length,
  visible: el ? __visible(el) : false,
  text: el ? __norm(el.textContent) : null,
  value: el && 'value' in el ? String(el.value) : null,
  checked: el ? !!el.checked : false
};";

const CLICK_BODY: &str = "const el = els[0];
if (!el) return { ok: false, error: 'no element' };
if (el.focus) el.focus();
el.click();
return { ok: true, error: null };";

const FOCUS_BODY: &str = "const el = els[0];
if (!el) return { ok: false, error: 'no element' };
el.focus();
return { ok: true, error: null };";

const FILL_BODY: &str = "const el = els[0];
if (!el) return { ok: false, error: 'no element' };
if (!('value' in el)) return { ok: false, error: 'element has no value property' };
el.focus();
el.value = __VALUE__;
el.dispatchEvent(new Event('input', { bubbles: true }));
el.dispatchEvent(new Event('change', { bubbles: true }));
return { ok: true, error: null };";

const SET_CHECKED_BODY: &str = "const el = els[0];
if (!el) return { ok: false, error: 'no element' };
if (!!el.checked !== __WANT__) { el.click(); }
if (!!el.checked !== __WANT__) return { ok: false, error: 'checkbox state unchanged' };
return { ok: true, error: null };";

const SELECT_OPTION_BODY: &str = "const el = els[0];
if (!el) return { ok: false, error: 'no element' };
if (!el.options) return { ok: false, error: 'element is not a select' };
const wanted = __LABEL__;
const option = Array.from(el.options).find(o => __norm(o.label) === wanted || o.value === wanted);
if (!option) return { ok: false, error: 'no option matching ' + wanted };
el.value = option.value;
el.dispatchEvent(new Event('input', { bubbles: true }));
el.dispatchEvent(new Event('change', { bubbles: true }));
return { ok: true, error: null };";

/// Wrap a script body in an IIFE that resolves `els` for `descriptor`.
fn query_script(descriptor: &str, body: &str) -> String {
    format!(
        "(() => {{\n{QUERY_RUNTIME}\nconst desc = {descriptor};\nconst els = __resolve(desc, document);\n{body}\n}})()"
    )
}

/// JSON string literal usable inside generated scripts.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| String::from("''"))
}

// ============================================================================
// ROLES
// ============================================================================

/// ARIA roles understood by the query runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AriaRole {
    /// Clickable button (`<button>`, `input[type=submit]`, `role=button`)
    Button,
    /// Checkbox input
    Checkbox,
    /// Heading (`<h1>`..`<h6>`)
    Heading,
    /// Anchor with an href
    Link,
    /// `<option>` inside a select
    Option,
    /// Single-select dropdown
    Combobox,
    /// Text input or textarea
    Textbox,
}

impl AriaRole {
    /// Role name as it appears in ARIA attributes and descriptors
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Checkbox => "checkbox",
            Self::Heading => "heading",
            Self::Link => "link",
            Self::Option => "option",
            Self::Combobox => "combobox",
            Self::Textbox => "textbox",
        }
    }
}

impl fmt::Display for AriaRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// SELECTORS
// ============================================================================

/// Element-addressing strategy, serialized as the query descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Selector {
    /// CSS selector
    Css {
        /// The CSS selector string
        css: String,
    },
    /// Elements whose visible text matches; non-exact is a case-insensitive
    /// substring search, and only innermost matches are kept
    Text {
        /// Text to match
        text: String,
        /// Require a full normalized match
        #[serde(default)]
        exact: bool,
    },
    /// Elements with a given ARIA role, optionally filtered by accessible name
    Role {
        /// Required role
        role: AriaRole,
        /// Accessible-name filter
        #[serde(default)]
        name: Option<String>,
        /// Require a full normalized name match
        #[serde(default)]
        exact: bool,
    },
    /// Inner selector resolved within each match of the outer selector
    Within {
        /// Scope selector
        outer: Box<Selector>,
        /// Selector resolved inside each scope match
        inner: Box<Selector>,
    },
    /// A single match of the base selector, by index
    Nth {
        /// Base selector
        base: Box<Selector>,
        /// Zero-based match index
        index: usize,
    },
}

impl Selector {
    /// CSS selector
    pub fn css(css: impl Into<String>) -> Self {
        Self::Css { css: css.into() }
    }

    /// Substring text match (case-insensitive)
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            exact: false,
        }
    }

    /// Full-text match
    pub fn text_exact(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            exact: true,
        }
    }

    /// All elements with a role
    #[must_use]
    pub const fn role(role: AriaRole) -> Self {
        Self::Role {
            role,
            name: None,
            exact: false,
        }
    }

    /// Elements with a role whose accessible name contains `name`
    pub fn role_named(role: AriaRole, name: impl Into<String>) -> Self {
        Self::Role {
            role,
            name: Some(name.into()),
            exact: false,
        }
    }

    /// Elements with a role whose accessible name equals `name`
    pub fn role_named_exact(role: AriaRole, name: impl Into<String>) -> Self {
        Self::Role {
            role,
            name: Some(name.into()),
            exact: true,
        }
    }

    /// Resolve `inner` within each match of `outer`
    #[must_use]
    pub fn within(outer: Self, inner: Self) -> Self {
        Self::Within {
            outer: Box::new(outer),
            inner: Box::new(inner),
        }
    }

    /// Restrict to the match at `index`
    #[must_use]
    pub fn nth(self, index: usize) -> Self {
        Self::Nth {
            base: Box::new(self),
            index,
        }
    }

    /// JSON descriptor consumed by the query runtime
    #[must_use]
    pub fn descriptor(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| String::from("null"))
    }

    /// Human-readable form used in error messages
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::Css { css } => format!("css={css}"),
            Self::Text { text, exact: false } => format!("text={text:?}"),
            Self::Text { text, exact: true } => format!("text={text:?} (exact)"),
            Self::Role {
                role, name: None, ..
            } => format!("role={role}"),
            Self::Role {
                role,
                name: Some(name),
                exact: false,
            } => format!("role={role}[name={name:?}]"),
            Self::Role {
                role,
                name: Some(name),
                exact: true,
            } => format!("role={role}[name={name:?} exact]"),
            Self::Within { outer, inner } => {
                format!("{} >> {}", outer.description(), inner.description())
            }
            Self::Nth { base, index } => format!("{} >> nth={index}", base.description()),
        }
    }
}

// ============================================================================
// OPTIONS
// ============================================================================

/// Resolution options carried by every locator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocatorOptions {
    /// How long actions and assertions may wait
    pub timeout: Duration,
    /// Delay between state polls
    pub poll_interval: Duration,
    /// Error when a single-element operation resolves multiple elements
    pub strict: bool,
    /// Require visibility before acting
    pub visible: bool,
}

impl Default for LocatorOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            strict: true,
            visible: true,
        }
    }
}

impl LocatorOptions {
    /// Options with the default timeout, polling, and strictness
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the action/assertion timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the polling interval
    #[must_use]
    pub const fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Enable or disable strict single-match mode
    #[must_use]
    pub const fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Require or waive visibility before actions
    #[must_use]
    pub const fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}

// ============================================================================
// LOCATOR
// ============================================================================

/// A deferred reference to zero or more DOM elements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Locator {
    selector: Selector,
    options: LocatorOptions,
}

impl Locator {
    /// Locator from a CSS selector with default options
    pub fn new(css: impl Into<String>) -> Self {
        Self::from_selector(Selector::css(css))
    }

    /// Locator from any selector with default options
    #[must_use]
    pub fn from_selector(selector: Selector) -> Self {
        Self {
            selector,
            options: LocatorOptions::default(),
        }
    }

    /// The underlying selector
    #[must_use]
    pub const fn selector(&self) -> &Selector {
        &self.selector
    }

    /// The resolution options
    #[must_use]
    pub const fn options(&self) -> &LocatorOptions {
        &self.options
    }

    /// Override the timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.options.timeout = timeout;
        self
    }

    /// Override the polling interval
    #[must_use]
    pub const fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.options.poll_interval = poll_interval;
        self
    }

    /// Override strict single-match mode
    #[must_use]
    pub const fn with_strict(mut self, strict: bool) -> Self {
        self.options.strict = strict;
        self
    }

    /// Override the visibility requirement for actions
    #[must_use]
    pub const fn with_visible(mut self, visible: bool) -> Self {
        self.options.visible = visible;
        self
    }

    /// Locator for the match at `index`, keeping these options
    #[must_use]
    pub fn nth(&self, index: usize) -> Self {
        Self {
            selector: self.selector.clone().nth(index),
            options: self.options,
        }
    }

    /// Locator for the first match
    #[must_use]
    pub fn first(&self) -> Self {
        self.nth(0)
    }

    /// Human-readable form used in error messages
    #[must_use]
    pub fn description(&self) -> String {
        self.selector.description()
    }

    /// Script returning the number of matches
    #[must_use]
    pub fn count_query(&self) -> String {
        query_script(&self.selector.descriptor(), COUNT_BODY)
    }

    /// Script returning the aggregate [`ElementState`] of the matches
    #[must_use]
    pub fn state_query(&self) -> String {
        query_script(&self.selector.descriptor(), STATE_BODY)
    }

    /// Click the first match
    #[must_use]
    pub fn click(&self) -> LocatorAction {
        LocatorAction::Click {
            locator: self.clone(),
        }
    }

    /// Focus the first match
    #[must_use]
    pub fn focus(&self) -> LocatorAction {
        LocatorAction::Focus {
            locator: self.clone(),
        }
    }

    /// Replace the first match's value, firing input and change events
    pub fn fill(&self, value: impl Into<String>) -> LocatorAction {
        LocatorAction::Fill {
            locator: self.clone(),
            value: value.into(),
        }
    }

    /// Empty the first match's value
    #[must_use]
    pub fn clear(&self) -> LocatorAction {
        LocatorAction::Fill {
            locator: self.clone(),
            value: String::new(),
        }
    }

    /// Drive a checkbox to the given state
    #[must_use]
    pub fn set_checked(&self, checked: bool) -> LocatorAction {
        LocatorAction::SetChecked {
            locator: self.clone(),
            checked,
        }
    }

    /// Select the option whose label or value matches
    pub fn select_option(&self, label: impl Into<String>) -> LocatorAction {
        LocatorAction::SelectOption {
            locator: self.clone(),
            label: label.into(),
        }
    }
}

// ============================================================================
// ELEMENT STATE
// ============================================================================

/// Snapshot of a locator's matches, as returned by the state query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementState {
    /// Number of elements the selector resolved
    pub count: usize,
    /// Whether the first match is visible
    pub visible: bool,
    /// Normalized text content of the first match
    pub text: Option<String>,
    /// Form value of the first match, when it has one
    pub value: Option<String>,
    /// Checked state of the first match
    pub checked: bool,
}

/// Result object returned by action scripts
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ActionOutcome {
    pub(crate) ok: bool,
    pub(crate) error: Option<String>,
}

// ============================================================================
// ACTIONS
// ============================================================================

/// An element interaction, ready to run against a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LocatorAction {
    /// Click the first match
    Click {
        /// Target locator
        locator: Locator,
    },
    /// Focus the first match
    Focus {
        /// Target locator
        locator: Locator,
    },
    /// Replace the first match's value
    Fill {
        /// Target locator
        locator: Locator,
        /// New value
        value: String,
    },
    /// Drive a checkbox to a state
    SetChecked {
        /// Target locator
        locator: Locator,
        /// Desired checked state
        checked: bool,
    },
    /// Select a dropdown option by label or value
    SelectOption {
        /// Target locator
        locator: Locator,
        /// Option label or value
        label: String,
    },
}

impl LocatorAction {
    /// The locator this action targets
    #[must_use]
    pub const fn locator(&self) -> &Locator {
        match self {
            Self::Click { locator }
            | Self::Focus { locator }
            | Self::Fill { locator, .. }
            | Self::SetChecked { locator, .. }
            | Self::SelectOption { locator, .. } => locator,
        }
    }

    /// Script performing this action, returning an outcome object
    #[must_use]
    pub fn script(&self) -> String {
        let descriptor = self.locator().selector().descriptor();
        let body = match self {
            Self::Click { .. } => CLICK_BODY.to_string(),
            Self::Focus { .. } => FOCUS_BODY.to_string(),
            Self::Fill { value, .. } => FILL_BODY.replace("__VALUE__", &js_string(value)),
            Self::SetChecked { checked, .. } => {
                SET_CHECKED_BODY.replace("__WANT__", if *checked { "true" } else { "false" })
            }
            Self::SelectOption { label, .. } => {
                SELECT_OPTION_BODY.replace("__LABEL__", &js_string(label))
            }
        };
        query_script(&descriptor, &body)
    }
}

// ============================================================================
// EXPECTATIONS
// ============================================================================

/// Assertion builder for a locator, in the `expect(locator).to_*` style
#[derive(Debug, Clone)]
pub struct Expect {
    locator: Locator,
}

impl Expect {
    /// Expect at least one visible match
    #[must_use]
    pub fn to_be_visible(self) -> ExpectAssertion {
        ExpectAssertion::IsVisible {
            locator: self.locator,
        }
    }

    /// Expect no match, or an invisible first match
    #[must_use]
    pub fn to_be_hidden(self) -> ExpectAssertion {
        ExpectAssertion::IsHidden {
            locator: self.locator,
        }
    }

    /// Expect an exact number of matches
    #[must_use]
    pub fn to_have_count(self, expected: usize) -> ExpectAssertion {
        ExpectAssertion::HasCount {
            locator: self.locator,
            expected,
        }
    }

    /// Expect the first match's normalized text to equal `expected`
    pub fn to_have_text(self, expected: impl Into<String>) -> ExpectAssertion {
        ExpectAssertion::HasText {
            locator: self.locator,
            expected: expected.into(),
        }
    }

    /// Expect the first match's normalized text to contain `expected`
    pub fn to_contain_text(self, expected: impl Into<String>) -> ExpectAssertion {
        ExpectAssertion::ContainsText {
            locator: self.locator,
            expected: expected.into(),
        }
    }

    /// Expect the first match's form value to equal `expected`
    pub fn to_have_value(self, expected: impl Into<String>) -> ExpectAssertion {
        ExpectAssertion::HasValue {
            locator: self.locator,
            expected: expected.into(),
        }
    }

    /// Expect the first match's checked state
    #[must_use]
    pub fn to_be_checked(self, expected: bool) -> ExpectAssertion {
        ExpectAssertion::IsChecked {
            locator: self.locator,
            expected,
        }
    }
}

/// A concrete expectation about a locator's state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExpectAssertion {
    /// At least one visible match
    IsVisible {
        /// Target locator
        locator: Locator,
    },
    /// No match, or an invisible first match
    IsHidden {
        /// Target locator
        locator: Locator,
    },
    /// Exact match count
    HasCount {
        /// Target locator
        locator: Locator,
        /// Expected count
        expected: usize,
    },
    /// Exact normalized text
    HasText {
        /// Target locator
        locator: Locator,
        /// Expected text
        expected: String,
    },
    /// Normalized text containing a substring
    ContainsText {
        /// Target locator
        locator: Locator,
        /// Expected substring
        expected: String,
    },
    /// Exact form value
    HasValue {
        /// Target locator
        locator: Locator,
        /// Expected value
        expected: String,
    },
    /// Checked state
    IsChecked {
        /// Target locator
        locator: Locator,
        /// Expected checked state
        expected: bool,
    },
}

impl ExpectAssertion {
    /// The locator this expectation observes
    #[must_use]
    pub const fn locator(&self) -> &Locator {
        match self {
            Self::IsVisible { locator }
            | Self::IsHidden { locator }
            | Self::HasCount { locator, .. }
            | Self::HasText { locator, .. }
            | Self::ContainsText { locator, .. }
            | Self::HasValue { locator, .. }
            | Self::IsChecked { locator, .. } => locator,
        }
    }

    /// Whether the expectation addresses a single element, making multiple
    /// strict-mode matches an error rather than data
    #[must_use]
    pub const fn requires_single_match(&self) -> bool {
        !matches!(self, Self::IsHidden { .. } | Self::HasCount { .. })
    }

    /// Human-readable form used in failure messages
    #[must_use]
    pub fn expectation(&self) -> String {
        match self {
            Self::IsVisible { .. } => String::from("is visible"),
            Self::IsHidden { .. } => String::from("is hidden"),
            Self::HasCount { expected, .. } => format!("has count {expected}"),
            Self::HasText { expected, .. } => format!("has text {expected:?}"),
            Self::ContainsText { expected, .. } => format!("contains text {expected:?}"),
            Self::HasValue { expected, .. } => format!("has value {expected:?}"),
            Self::IsChecked { expected: true, .. } => String::from("is checked"),
            Self::IsChecked {
                expected: false, ..
            } => String::from("is unchecked"),
        }
    }

    /// Whether `state` satisfies the expectation
    #[must_use]
    pub fn check_state(&self, state: &ElementState) -> bool {
        match self {
            Self::IsVisible { .. } => state.count > 0 && state.visible,
            Self::IsHidden { .. } => state.count == 0 || !state.visible,
            Self::HasCount { expected, .. } => state.count == *expected,
            Self::HasText { expected, .. } => state.text.as_deref() == Some(expected.as_str()),
            Self::ContainsText { expected, .. } => state
                .text
                .as_deref()
                .is_some_and(|text| text.contains(expected.as_str())),
            Self::HasValue { expected, .. } => state.value.as_deref() == Some(expected.as_str()),
            Self::IsChecked { expected, .. } => state.count > 0 && state.checked == *expected,
        }
    }

    /// Validate a text-bearing expectation against an observed string
    pub fn validate_text(&self, actual: &str) -> SondarResult<()> {
        let passed = match self {
            Self::HasText { expected, .. } | Self::HasValue { expected, .. } => actual == expected,
            Self::ContainsText { expected, .. } => actual.contains(expected.as_str()),
            _ => {
                return Err(SondarError::InvalidState {
                    message: format!("{} is not a text expectation", self.expectation()),
                })
            }
        };
        if passed {
            Ok(())
        } else {
            Err(SondarError::AssertionError {
                message: format!(
                    "{} {}, got {actual:?}",
                    self.locator().description(),
                    self.expectation()
                ),
            })
        }
    }

    /// Validate a count expectation against an observed count
    pub fn validate_count(&self, actual: usize) -> SondarResult<()> {
        match self {
            Self::HasCount { expected, .. } if actual == *expected => Ok(()),
            Self::HasCount { .. } => Err(SondarError::AssertionError {
                message: format!(
                    "{} {}, got {actual}",
                    self.locator().description(),
                    self.expectation()
                ),
            }),
            _ => Err(SondarError::InvalidState {
                message: format!("{} is not a count expectation", self.expectation()),
            }),
        }
    }
}

/// Start an expectation over a locator
#[must_use]
pub fn expect(locator: Locator) -> Expect {
    Expect { locator }
}

// ============================================================================
// TESTS
// ============================================================================
