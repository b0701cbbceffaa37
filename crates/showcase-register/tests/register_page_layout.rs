//! Offline checks of the registration page object
//!
//! Nothing here needs a browser: these tests pin down the locator table,
//! the page-object trait values, the input fixtures, and (without the
//! `browser` feature) the command log the page records.

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use showcase_register::data;
use showcase_register::pages::{upload_feeds_page, RegisterPage, REGISTER_URL};
use sondar::{PageObject, UrlMatcher};

// ============================================================================
// Locator table
// ============================================================================

#[test]
fn heading_and_tab_locators() {
    let page = RegisterPage::new();
    assert_eq!(
        page.heading.description(),
        "role=heading[name=\"Register for Shoptimised...\"]"
    );
    assert_eq!(
        page.details_tab_heading.description(),
        "text=\"Enter your details below\" (exact)"
    );
}

#[test]
fn your_name_locators() {
    let page = RegisterPage::new();
    assert_eq!(
        page.your_name.label.description(),
        "text=\"Your Name: * Required\""
    );
    assert_eq!(
        page.your_name.input.description(),
        "role=textbox[name=\"Your Name: * Required\"]"
    );
    assert_eq!(
        page.your_name.error_text.description(),
        "text=\"Your Name is required\""
    );
    assert_eq!(page.your_name.invalid_text.description(), "text=\"XXXXXXXX\"");
}

#[test]
fn company_name_locators() {
    let page = RegisterPage::new();
    assert_eq!(
        page.company_name.label.description(),
        "text=\"Company Name: * Required\""
    );
    assert_eq!(
        page.company_name.input.description(),
        "role=textbox[name=\"Company Name: * Required\"]"
    );
    assert_eq!(
        page.company_name.error_text.description(),
        "text=\"Company Name is required\""
    );
    assert_eq!(
        page.company_name.invalid_text.description(),
        "text=\"XXXXXXXX\""
    );
}

#[test]
fn company_type_locators() {
    let page = RegisterPage::new();
    assert_eq!(page.company_type_label.description(), "text=\"Company Type:\"");
    assert_eq!(
        page.company_type_dropdown.description(),
        "css=#userCompanyType"
    );
    assert_eq!(
        page.company_type_options.description(),
        "css=#userCompanyType >> role=option"
    );
}

#[test]
fn what_type_of_company_locators() {
    let page = RegisterPage::new();
    assert_eq!(
        page.what_type_of_company_label.description(),
        "text=\"What type of Company are you?\""
    );
    assert_eq!(
        page.what_type_of_company_input.description(),
        "css=#userCompanyTypeOther"
    );
    assert_eq!(
        page.what_type_of_company_error_text.description(),
        "text=\"Please add some information about your Company\""
    );
}

#[test]
fn user_email_locators() {
    let page = RegisterPage::new();
    assert_eq!(
        page.user_email.label.description(),
        "text=\"User Email: * Required\""
    );
    assert_eq!(
        page.user_email.input.description(),
        "role=textbox[name=\"User Email: * Required\"]"
    );
    assert_eq!(
        page.user_email.error_text.description(),
        "text=\"Email Address is incorrect or missing\""
    );
    assert_eq!(
        page.user_email.invalid_text.description(),
        "text=\"Email Address is invalid\""
    );
}

#[test]
fn password_locators() {
    let page = RegisterPage::new();
    assert_eq!(
        page.password_requirements_heading.description(),
        "role=heading[name=\"Password Requirements\"]"
    );
    // The plain password locators are exact so the confirm-password
    // field cannot shadow them
    assert_eq!(
        page.password.label.description(),
        "text=\"Password: * Required\" (exact)"
    );
    assert_eq!(
        page.password.input.description(),
        "role=textbox[name=\"Password: * Required\" exact]"
    );
    assert_eq!(
        page.password.error_text.description(),
        "text=\"Password is Required\""
    );
    assert_eq!(
        page.confirm_password.label.description(),
        "text=\"Confirm Password: * Required\""
    );
    assert_eq!(
        page.confirm_password.input.description(),
        "role=textbox[name=\"Confirm Password: * Required\"]"
    );
    assert_eq!(
        page.confirm_password.error_text.description(),
        "text=\"Password Confirmation is Required\""
    );
    assert_eq!(
        page.password_mismatch_text.description(),
        "text=\"XXXXXXXX\""
    );
}

#[test]
fn terms_navigation_locators() {
    let page = RegisterPage::new();
    assert_eq!(
        page.accept_tandcs_label.description(),
        "text=\"I accept the Terms &\""
    );
    assert_eq!(
        page.accept_tandcs_checkbox.description(),
        "text=\"I accept the Terms &\" >> role=checkbox"
    );
    assert_eq!(
        page.accept_tandcs_error_text.description(),
        "text=\"Terms and Conditions must be accepted before proceeding\""
    );
    assert_eq!(
        page.login_here_link.description(),
        "role=link[name=\"here\"]"
    );
    assert_eq!(
        page.next_button.description(),
        "role=button[name=\"Next\"]"
    );
}

// ============================================================================
// Page object trait and URL matching
// ============================================================================

#[test]
fn register_page_trait_values() {
    let page = RegisterPage::new();
    assert_eq!(page.url_pattern(), REGISTER_URL);
    assert_eq!(page.page_name(), "RegisterPage");
    assert_eq!(page.load_timeout_ms(), 30000);
}

#[test]
fn register_url_path_matches() {
    let matcher = UrlMatcher::new("/register");
    assert!(matcher.matches("/register"));
    assert!(!matcher.matches("/login"));
    assert!(!matcher.matches("/register/confirm"));
}

#[test]
fn upload_feeds_page_layout() {
    let page = upload_feeds_page();
    assert_eq!(page.url_pattern(), "https://shoptimised.co/upload-feeds");
    assert_eq!(
        page.locator("heading").unwrap().description(),
        "role=heading[name=\"Upload feeds\"]"
    );
    assert!(page.locator("missing").is_none());
}

// ============================================================================
// Input fixtures
// ============================================================================

#[test]
fn password_pairs_cover_each_rule() {
    let messages: Vec<&str> = data::INVALID_PASSWORDS.iter().map(|(_, m)| *m).collect();
    assert!(messages.contains(&"Password must be at least 10 characters"));
    assert!(messages
        .contains(&"The user password field must contain at least one number."));
    assert!(messages
        .contains(&"The user password field must contain at least one symbol."));
}

#[test]
fn invalid_passwords_really_break_their_rule() {
    for (password, message) in data::INVALID_PASSWORDS {
        let breaks_some_rule = password.len() < 10
            || !password.chars().any(char::is_uppercase)
            || !password.chars().any(char::is_lowercase)
            || !password.chars().any(char::is_numeric)
            || !password.chars().any(|c| !c.is_alphanumeric());
        assert!(breaks_some_rule, "{password} should violate {message}");
    }
}

proptest! {
    #[test]
    fn prop_filler_is_all_as(len in 0usize..512) {
        let s = data::filler(len);
        prop_assert_eq!(s.len(), len);
        prop_assert!(s.chars().all(|c| c == 'a'));
    }

    #[test]
    fn prop_unique_emails_are_distinct_and_well_formed(_round in 0u8..32) {
        let a = data::unique_email();
        let b = data::unique_email();
        prop_assert_ne!(&a, &b);
        prop_assert!(a.ends_with("@testmail.com"));
        prop_assert_eq!(a.matches('@').count(), 1);
    }
}

// ============================================================================
// Command-log wiring (mock backend only)
// ============================================================================

#[cfg(not(feature = "browser"))]
mod command_log {
    use super::*;
    use sondar::{Browser, BrowserConfig, Key, MockCommand};

    #[test]
    fn happy_path_records_expected_commands() {
        let browser = Browser::launch(BrowserConfig::default()).unwrap();
        let mut page = browser.new_page().unwrap();
        let register = RegisterPage::new();

        page.goto(REGISTER_URL).unwrap();
        page.fill(&register.your_name.input, "Test User").unwrap();
        page.fill(&register.company_name.input, "Test Company")
            .unwrap();
        page.select_option(&register.company_type_dropdown, "Agency")
            .unwrap();
        page.fill(&register.user_email.input, &data::unique_email())
            .unwrap();
        page.fill(&register.password.input, data::VALID_PASSWORD)
            .unwrap();
        page.fill(&register.confirm_password.input, data::VALID_PASSWORD)
            .unwrap();
        page.check(&register.accept_tandcs_checkbox).unwrap();
        page.click(&register.next_button).unwrap();

        assert_eq!(page.current_url(), REGISTER_URL);
        assert_eq!(page.command_count(), 9);
        assert_eq!(
            page.commands()[0],
            MockCommand::Navigate(REGISTER_URL.to_string())
        );
        assert_eq!(
            page.commands()[3],
            MockCommand::SelectOption {
                locator: "css=#userCompanyType".to_string(),
                label: "Agency".to_string(),
            }
        );
        assert_eq!(
            page.commands()[7],
            MockCommand::SetChecked {
                locator: "text=\"I accept the Terms &\" >> role=checkbox".to_string(),
                checked: true,
            }
        );
        assert_eq!(
            page.commands()[8],
            MockCommand::Click("role=button[name=\"Next\"]".to_string())
        );
    }

    #[test]
    fn keyboard_dropdown_selection_records_presses() {
        let browser = Browser::launch(BrowserConfig::default()).unwrap();
        let mut page = browser.new_page().unwrap();
        let register = RegisterPage::new();

        page.click(&register.company_type_dropdown).unwrap();
        page.press(&register.company_type_dropdown, Key::ArrowDown)
            .unwrap();
        page.press(&register.company_type_dropdown, Key::Enter)
            .unwrap();

        let presses: Vec<_> = page
            .commands()
            .iter()
            .filter(|c| matches!(c, MockCommand::Press { .. }))
            .collect();
        assert_eq!(presses.len(), 2);
        assert_eq!(
            *presses[1],
            MockCommand::Press {
                locator: "css=#userCompanyType".to_string(),
                key: Key::Enter,
            }
        );
        browser.close().unwrap();
    }

    #[test]
    fn clearing_a_field_is_recorded() {
        let browser = Browser::launch(BrowserConfig::default()).unwrap();
        let mut page = browser.new_page().unwrap();
        let register = RegisterPage::new();

        page.fill(&register.user_email.input, "plainaddress").unwrap();
        page.clear(&register.user_email.input).unwrap();

        assert_eq!(
            page.commands()[1],
            MockCommand::Clear("role=textbox[name=\"User Email: * Required\"]".to_string())
        );
    }
}
