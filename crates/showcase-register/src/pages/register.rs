//! Registration page object
//!
//! Encapsulates every element of the multi-step registration form at
//! `https://shoptimised.co/register`. Locators are built eagerly in
//! [`RegisterPage::new`]; nothing touches the network until a verb runs.

use sondar::{AriaRole, Locator, PageObject, Selector};

#[cfg(feature = "browser")]
use sondar::{expect, Page, SondarResult};

/// The live registration form this page object drives
pub const REGISTER_URL: &str = "https://shoptimised.co/register";

/// Stands in for validation messages the form does not render yet.
/// Matches no element, so "placeholder visible" assertions fail until
/// the site grows a real message.
const FUTURE_VALIDATION_PLACEHOLDER: &str = "XXXXXXXX";

/// A labeled text input with its required-field and invalid-value messages
#[derive(Debug, Clone)]
pub struct TextField {
    /// Visible field label
    pub label: Locator,
    /// The input itself, addressed by accessible name
    pub input: Locator,
    /// Message shown when the field is left empty
    pub error_text: Locator,
    /// Message shown when the value is rejected
    pub invalid_text: Locator,
}

/// A labeled password input with its required-field message
#[derive(Debug, Clone)]
pub struct PasswordField {
    /// Visible field label
    pub label: Locator,
    /// The input itself, addressed by accessible name
    pub input: Locator,
    /// Message shown when the field is left empty
    pub error_text: Locator,
}

/// Page object for the registration form's details step
#[derive(Debug, Clone)]
pub struct RegisterPage {
    /// Page heading
    pub heading: Locator,
    /// Heading of the active details tab
    pub details_tab_heading: Locator,
    /// Your Name field group
    pub your_name: TextField,
    /// Company Name field group
    pub company_name: TextField,
    /// Company Type dropdown label
    pub company_type_label: Locator,
    /// Company Type `<select>` element
    pub company_type_dropdown: Locator,
    /// Options inside the Company Type dropdown
    pub company_type_options: Locator,
    /// Label revealed when Company Type is "Other"
    pub what_type_of_company_label: Locator,
    /// Free-text input revealed when Company Type is "Other"
    pub what_type_of_company_input: Locator,
    /// Required-field message for the "Other" free-text input
    pub what_type_of_company_error_text: Locator,
    /// User Email field group
    pub user_email: TextField,
    /// Heading of the password requirements panel
    pub password_requirements_heading: Locator,
    /// Password field group
    pub password: PasswordField,
    /// Confirm Password field group
    pub confirm_password: PasswordField,
    /// Message for a confirm password that does not match (no real
    /// message exists yet; see [`FUTURE_VALIDATION_PLACEHOLDER`])
    pub password_mismatch_text: Locator,
    /// Terms and Conditions label
    pub accept_tandcs_label: Locator,
    /// Terms and Conditions checkbox, scoped under its label
    pub accept_tandcs_checkbox: Locator,
    /// Message shown when terms are not accepted
    pub accept_tandcs_error_text: Locator,
    /// "Login here" link for existing accounts
    pub login_here_link: Locator,
    /// Next button advancing to the following step
    pub next_button: Locator,
}

impl Default for RegisterPage {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterPage {
    /// Build the full locator table for the registration form
    #[must_use]
    pub fn new() -> Self {
        let placeholder = || Locator::from_selector(Selector::text(FUTURE_VALIDATION_PLACEHOLDER));

        let your_name = TextField {
            label: Locator::from_selector(Selector::text("Your Name: * Required")),
            input: Locator::from_selector(Selector::role_named(
                AriaRole::Textbox,
                "Your Name: * Required",
            )),
            error_text: Locator::from_selector(Selector::text("Your Name is required")),
            invalid_text: placeholder(),
        };

        let company_name = TextField {
            label: Locator::from_selector(Selector::text("Company Name: * Required")),
            input: Locator::from_selector(Selector::role_named(
                AriaRole::Textbox,
                "Company Name: * Required",
            )),
            error_text: Locator::from_selector(Selector::text("Company Name is required")),
            invalid_text: placeholder(),
        };

        let user_email = TextField {
            label: Locator::from_selector(Selector::text("User Email: * Required")),
            input: Locator::from_selector(Selector::role_named(
                AriaRole::Textbox,
                "User Email: * Required",
            )),
            error_text: Locator::from_selector(Selector::text(
                "Email Address is incorrect or missing",
            )),
            invalid_text: Locator::from_selector(Selector::text("Email Address is invalid")),
        };

        let password = PasswordField {
            label: Locator::from_selector(Selector::text_exact("Password: * Required")),
            input: Locator::from_selector(Selector::role_named_exact(
                AriaRole::Textbox,
                "Password: * Required",
            )),
            error_text: Locator::from_selector(Selector::text("Password is Required")),
        };

        let confirm_password = PasswordField {
            label: Locator::from_selector(Selector::text("Confirm Password: * Required")),
            input: Locator::from_selector(Selector::role_named(
                AriaRole::Textbox,
                "Confirm Password: * Required",
            )),
            error_text: Locator::from_selector(Selector::text(
                "Password Confirmation is Required",
            )),
        };

        let company_type_dropdown = Locator::from_selector(Selector::css("#userCompanyType"));
        let company_type_options = Locator::from_selector(Selector::within(
            Selector::css("#userCompanyType"),
            Selector::role(AriaRole::Option),
        ));

        let accept_tandcs_label = Locator::from_selector(Selector::text("I accept the Terms &"));
        let accept_tandcs_checkbox = Locator::from_selector(Selector::within(
            Selector::text("I accept the Terms &"),
            Selector::role(AriaRole::Checkbox),
        ));

        Self {
            heading: Locator::from_selector(Selector::role_named(
                AriaRole::Heading,
                "Register for Shoptimised...",
            )),
            details_tab_heading: Locator::from_selector(Selector::text_exact(
                "Enter your details below",
            )),
            your_name,
            company_name,
            company_type_label: Locator::from_selector(Selector::text("Company Type:")),
            company_type_dropdown,
            company_type_options,
            what_type_of_company_label: Locator::from_selector(Selector::text(
                "What type of Company are you?",
            )),
            what_type_of_company_input: Locator::from_selector(Selector::css(
                "#userCompanyTypeOther",
            )),
            what_type_of_company_error_text: Locator::from_selector(Selector::text(
                "Please add some information about your Company",
            )),
            user_email,
            password_requirements_heading: Locator::from_selector(Selector::role_named(
                AriaRole::Heading,
                "Password Requirements",
            )),
            password,
            confirm_password,
            password_mismatch_text: placeholder(),
            accept_tandcs_label,
            accept_tandcs_checkbox,
            accept_tandcs_error_text: Locator::from_selector(Selector::text(
                "Terms and Conditions must be accepted before proceeding",
            )),
            login_here_link: Locator::from_selector(Selector::role_named(AriaRole::Link, "here")),
            next_button: Locator::from_selector(Selector::role_named(AriaRole::Button, "Next")),
        }
    }
}

impl PageObject for RegisterPage {
    fn url_pattern(&self) -> &str {
        REGISTER_URL
    }

    fn page_name(&self) -> &str {
        "RegisterPage"
    }
}

#[cfg(feature = "browser")]
impl RegisterPage {
    /// Navigate to the registration form
    pub async fn goto(&self, page: &mut Page) -> SondarResult<()> {
        page.goto(REGISTER_URL).await
    }

    /// The page heading is visible
    pub async fn validate_heading(&self, page: &Page) -> SondarResult<()> {
        page.verify(&expect(self.heading.clone()).to_be_visible())
            .await
    }

    /// The details tab is the active step
    pub async fn validate_details_tab_active(&self, page: &Page) -> SondarResult<()> {
        page.verify(&expect(self.details_tab_heading.clone()).to_be_visible())
            .await
    }

    /// Your Name label and input are shown without an error
    pub async fn confirm_your_name_field_visible(&self, page: &Page) -> SondarResult<()> {
        page.verify(&expect(self.your_name.label.clone()).to_be_visible())
            .await?;
        page.verify(&expect(self.your_name.input.clone()).to_be_visible())
            .await?;
        page.verify(&expect(self.your_name.error_text.clone()).to_be_hidden())
            .await
    }

    /// Company Name label and input are shown without an error
    pub async fn confirm_company_name_field_visible(&self, page: &Page) -> SondarResult<()> {
        page.verify(&expect(self.company_name.label.clone()).to_be_visible())
            .await?;
        page.verify(&expect(self.company_name.input.clone()).to_be_visible())
            .await?;
        page.verify(&expect(self.company_name.error_text.clone()).to_be_hidden())
            .await
    }

    /// Company Type label and dropdown are shown
    pub async fn confirm_company_type_dropdown_visible(&self, page: &Page) -> SondarResult<()> {
        page.verify(&expect(self.company_type_label.clone()).to_be_visible())
            .await?;
        page.verify(&expect(self.company_type_dropdown.clone()).to_be_visible())
            .await
    }

    /// User Email label and input are shown without any message
    pub async fn confirm_user_email_field_visible(&self, page: &Page) -> SondarResult<()> {
        page.verify(&expect(self.user_email.label.clone()).to_be_visible())
            .await?;
        page.verify(&expect(self.user_email.input.clone()).to_be_visible())
            .await?;
        page.verify(&expect(self.user_email.error_text.clone()).to_be_hidden())
            .await?;
        page.verify(&expect(self.user_email.invalid_text.clone()).to_be_hidden())
            .await
    }

    /// The password requirements panel heading is shown
    pub async fn confirm_password_requirements_heading_visible(
        &self,
        page: &Page,
    ) -> SondarResult<()> {
        page.verify(&expect(self.password_requirements_heading.clone()).to_be_visible())
            .await
    }

    /// Password label and input are shown without an error
    pub async fn confirm_password_field_visible(&self, page: &Page) -> SondarResult<()> {
        page.verify(&expect(self.password.label.clone()).to_be_visible())
            .await?;
        page.verify(&expect(self.password.input.clone()).to_be_visible())
            .await?;
        page.verify(&expect(self.password.error_text.clone()).to_be_hidden())
            .await
    }

    /// Confirm Password label and input are shown without an error
    pub async fn confirm_confirm_password_visible(&self, page: &Page) -> SondarResult<()> {
        page.verify(&expect(self.confirm_password.label.clone()).to_be_visible())
            .await?;
        page.verify(&expect(self.confirm_password.input.clone()).to_be_visible())
            .await?;
        page.verify(&expect(self.confirm_password.error_text.clone()).to_be_hidden())
            .await
    }

    /// Terms label and checkbox are shown
    pub async fn confirm_accept_tandcs_visible(&self, page: &Page) -> SondarResult<()> {
        page.verify(&expect(self.accept_tandcs_label.clone()).to_be_visible())
            .await?;
        page.verify(&expect(self.accept_tandcs_checkbox.clone()).to_be_visible())
            .await
    }

    /// The "login here" link is shown
    pub async fn confirm_login_here_link_visible(&self, page: &Page) -> SondarResult<()> {
        page.verify(&expect(self.login_here_link.clone()).to_be_visible())
            .await
    }

    /// The Next button is shown
    pub async fn confirm_next_button_visible(&self, page: &Page) -> SondarResult<()> {
        page.verify(&expect(self.next_button.clone()).to_be_visible())
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod construction_tests {
        use super::*;

        #[test]
        fn test_default_matches_new() {
            let a = RegisterPage::new();
            let b = RegisterPage::default();
            assert_eq!(a.heading.description(), b.heading.description());
        }

        #[test]
        fn test_page_object_values() {
            let page = RegisterPage::new();
            assert_eq!(page.url_pattern(), REGISTER_URL);
            assert_eq!(page.page_name(), "RegisterPage");
            assert!(page.is_loaded());
        }
    }

    mod locator_tests {
        use super::*;

        #[test]
        fn test_password_locators_are_exact() {
            let page = RegisterPage::new();
            assert!(page.password.label.description().contains("exact"));
            assert!(page.password.input.description().contains("exact"));
            // Confirm Password must stay a substring match or it would
            // also be shadowed by the plain password input's name
            assert!(!page.confirm_password.input.description().contains("exact"));
        }

        #[test]
        fn test_checkbox_is_scoped_under_its_label() {
            let page = RegisterPage::new();
            let description = page.accept_tandcs_checkbox.description();
            assert!(description.contains("I accept the Terms &"));
            assert!(description.contains("checkbox"));
            assert!(description.contains(">>"));
        }

        #[test]
        fn test_placeholder_locators_match_nothing_real() {
            let page = RegisterPage::new();
            for placeholder in [
                &page.your_name.invalid_text,
                &page.company_name.invalid_text,
                &page.password_mismatch_text,
            ] {
                assert!(placeholder.description().contains("XXXXXXXX"));
            }
            // The email field has a real invalid message
            assert!(page
                .user_email
                .invalid_text
                .description()
                .contains("Email Address is invalid"));
        }
    }
}
