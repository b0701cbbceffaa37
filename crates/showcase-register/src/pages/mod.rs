//! Page objects for the registration flow

mod register;

pub use register::{PasswordField, RegisterPage, TextField, REGISTER_URL};

use sondar::{AriaRole, PageObjectBuilder, Selector, SimplePageObject};

/// The page the form lands on after a successful registration.
///
/// Only its heading matters to the suite, so a [`SimplePageObject`] is
/// enough; a full page object can replace it when the flow grows.
#[must_use]
pub fn upload_feeds_page() -> SimplePageObject {
    PageObjectBuilder::new()
        .with_url_pattern("https://shoptimised.co/upload-feeds")
        .with_locator(
            "heading",
            Selector::role_named(AriaRole::Heading, "Upload feeds"),
        )
        .build()
}
