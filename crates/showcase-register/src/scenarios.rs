//! Registration form scenarios
//!
//! Each function drives one end-to-end flow against the live form. They
//! are independent of each other; any ordering of scenarios must pass.
//! Scenarios whose name ends in `_unenforced` exercise validation the
//! site does not implement yet and assert against placeholder locators
//! that match nothing.

use crate::data;
use crate::pages::{upload_feeds_page, RegisterPage};
use sondar::{
    expect, Browser, BrowserConfig, Key, Locator, Page, Selector, SondarError, SondarResult,
};
use tracing::info;

/// A launched browser with a page already on the registration form
pub struct RegisterSession {
    /// The running browser, kept alive for the scenario's duration
    pub browser: Browser,
    /// The driven page
    pub page: Page,
    /// Locator table for the form
    pub register: RegisterPage,
}

impl std::fmt::Debug for RegisterSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterSession").finish_non_exhaustive()
    }
}

impl RegisterSession {
    /// Shut the browser down
    pub async fn close(self) -> SondarResult<()> {
        self.browser.close().await
    }
}

/// Launch Chromium and navigate to the registration form
pub async fn register_page_session() -> SondarResult<RegisterSession> {
    let config = BrowserConfig::default().with_no_sandbox();
    let browser = Browser::launch(config).await?;
    let mut page = browser.new_page().await?;
    let register = RegisterPage::new();
    register.goto(&mut page).await?;
    info!(url = crate::pages::REGISTER_URL, "registration session ready");
    Ok(RegisterSession {
        browser,
        page,
        register,
    })
}

/// Heading, tab state, and every field group are visible with no errors
pub async fn field_visibility(session: &RegisterSession) -> SondarResult<()> {
    let page = &session.page;
    let register = &session.register;

    register.validate_heading(page).await?;
    register.validate_details_tab_active(page).await?;

    register.confirm_your_name_field_visible(page).await?;
    register.confirm_company_name_field_visible(page).await?;
    register.confirm_company_type_dropdown_visible(page).await?;

    // The "Other" free-text field stays hidden until the dropdown says
    // otherwise; probed without asserting, matching the original flow
    let label_hidden = page.is_hidden(&register.what_type_of_company_label).await?;
    let input_hidden = page.is_hidden(&register.what_type_of_company_input).await?;
    info!(label_hidden, input_hidden, "what-type-of-company probe");

    register.confirm_user_email_field_visible(page).await?;
    register
        .confirm_password_requirements_heading_visible(page)
        .await?;
    register.confirm_password_field_visible(page).await?;
    register.confirm_confirm_password_visible(page).await?;
    register.confirm_accept_tandcs_visible(page).await?;
    register.confirm_login_here_link_visible(page).await?;
    register.confirm_next_button_visible(page).await
}

/// Submitting an empty form surfaces all six mandatory-field messages
pub async fn empty_mandatory_fields(session: &RegisterSession) -> SondarResult<()> {
    let page = &session.page;
    let register = &session.register;

    page.click(&register.next_button).await?;

    page.verify(&expect(register.your_name.error_text.clone()).to_be_visible())
        .await?;
    page.verify(&expect(register.company_name.error_text.clone()).to_be_visible())
        .await?;
    page.verify(&expect(register.user_email.error_text.clone()).to_be_visible())
        .await?;
    page.verify(&expect(register.password.error_text.clone()).to_be_visible())
        .await?;
    page.verify(&expect(register.confirm_password.error_text.clone()).to_be_visible())
        .await?;
    page.verify(&expect(register.accept_tandcs_error_text.clone()).to_be_visible())
        .await
}

/// Your Name length limit: 256 chars rejected, 255 accepted.
///
/// The site enforces no limit today; the rejected branch asserts a
/// placeholder locator and fails until a real message exists.
pub async fn user_name_max_length_unenforced(session: &RegisterSession) -> SondarResult<()> {
    let page = &session.page;
    let register = &session.register;

    page.fill(&register.your_name.input, &data::over_max_chars())
        .await?;
    page.click(&register.next_button).await?;
    page.verify(&expect(register.your_name.invalid_text.clone()).to_be_visible())
        .await?;

    page.clear(&register.your_name.input).await?;
    page.fill(&register.your_name.input, &data::max_chars())
        .await?;
    page.click(&register.next_button).await?;
    page.verify(&expect(register.your_name.invalid_text.clone()).to_be_hidden())
        .await
}

/// Your Name rejects special characters (no such rule exists yet)
pub async fn user_name_special_characters_unenforced(
    session: &RegisterSession,
) -> SondarResult<()> {
    let page = &session.page;
    let register = &session.register;

    page.fill(&register.your_name.input, data::SPECIAL_CHARS)
        .await?;
    page.click(&register.next_button).await?;
    page.verify(&expect(register.your_name.invalid_text.clone()).to_be_visible())
        .await
}

/// Company Name length limit, followed by a special-character probe
/// expecting no message (no such rules exist yet)
pub async fn company_name_max_length_unenforced(session: &RegisterSession) -> SondarResult<()> {
    let page = &session.page;
    let register = &session.register;

    page.fill(&register.company_name.input, &data::over_max_chars())
        .await?;
    page.click(&register.next_button).await?;
    page.verify(&expect(register.company_name.invalid_text.clone()).to_be_visible())
        .await?;

    page.clear(&register.company_name.input).await?;
    page.fill(&register.company_name.input, data::SPECIAL_CHARS)
        .await?;
    page.click(&register.next_button).await?;
    page.verify(&expect(register.company_name.invalid_text.clone()).to_be_hidden())
        .await
}

/// Company Name rejects special characters (no such rule exists yet)
pub async fn company_name_special_characters_unenforced(
    session: &RegisterSession,
) -> SondarResult<()> {
    let page = &session.page;
    let register = &session.register;

    page.fill(&register.company_name.input, data::SPECIAL_CHARS)
        .await?;
    page.click(&register.next_button).await?;
    page.verify(&expect(register.company_name.invalid_text.clone()).to_be_visible())
        .await
}

/// Dropdown holds Retailer/Agency/Other; picking Other reveals the
/// free-text field.
///
/// Native `<select>` options ignore synthetic pointer clicks, so the
/// selection happens by keyboard.
pub async fn company_type_dropdown(session: &RegisterSession) -> SondarResult<()> {
    let page = &session.page;
    let register = &session.register;

    page.click(&register.company_type_dropdown).await?;
    page.verify(&expect(register.company_type_options.clone()).to_have_count(3))
        .await?;
    page.verify(&expect(register.company_type_options.nth(0)).to_have_text("Retailer"))
        .await?;
    page.verify(&expect(register.company_type_options.nth(1)).to_have_text("Agency"))
        .await?;
    page.verify(&expect(register.company_type_options.nth(2)).to_have_text("Other"))
        .await?;

    page.press(&register.company_type_dropdown, Key::ArrowDown)
        .await?;
    page.press(&register.company_type_dropdown, Key::Enter)
        .await?;
    page.verify(&expect(register.company_type_dropdown.clone()).to_have_value("agency"))
        .await?;

    page.click(&register.company_type_dropdown).await?;
    page.press(&register.company_type_dropdown, Key::ArrowDown)
        .await?;
    page.press(&register.company_type_dropdown, Key::ArrowDown)
        .await?;
    page.press(&register.company_type_dropdown, Key::Enter)
        .await?;
    page.verify(&expect(register.company_type_dropdown.clone()).to_have_value("other"))
        .await?;

    page.verify(&expect(register.what_type_of_company_label.clone()).to_be_visible())
        .await?;
    page.verify(&expect(register.what_type_of_company_input.clone()).to_be_visible())
        .await
}

/// Email length limit: undocumented format rules fire before any
/// length limit is reached, so the long branch asserts the real
/// invalid-email message rather than a length-specific one
pub async fn user_email_max_length_unenforced(session: &RegisterSession) -> SondarResult<()> {
    let page = &session.page;
    let register = &session.register;

    let long_email = format!("{}@test.com", data::filler(256));
    page.fill(&register.user_email.input, &long_email).await?;
    page.click(&register.next_button).await?;
    page.verify(&expect(register.user_email.invalid_text.clone()).to_be_visible())
        .await?;

    page.clear(&register.user_email.input).await?;
    let short_email = format!("{}@test.com", data::filler(15));
    page.fill(&register.user_email.input, &short_email).await?;
    page.click(&register.next_button).await?;
    page.verify(&expect(register.user_email.invalid_text.clone()).to_be_hidden())
        .await
}

/// Email local parts built from special characters are rejected
pub async fn user_email_special_characters(session: &RegisterSession) -> SondarResult<()> {
    let page = &session.page;
    let register = &session.register;

    let email = format!("{}@test.com", data::SPECIAL_CHARS);
    page.fill(&register.user_email.input, &email).await?;
    page.click(&register.next_button).await?;
    page.verify(&expect(register.user_email.invalid_text.clone()).to_be_visible())
        .await
}

/// Each malformed email shape is rejected; a fresh valid one is not
pub async fn user_email_format_rules(session: &RegisterSession) -> SondarResult<()> {
    let page = &session.page;
    let register = &session.register;

    for email in data::INVALID_EMAILS {
        page.fill(&register.user_email.input, email).await?;
        page.click(&register.next_button).await?;
        page.verify(&expect(register.user_email.invalid_text.clone()).to_be_visible())
            .await?;
        page.clear(&register.user_email.input).await?;
    }

    page.fill(&register.user_email.input, &data::unique_email())
        .await?;
    page.click(&register.next_button).await?;
    page.verify(&expect(register.user_email.error_text.clone()).to_be_hidden())
        .await?;
    page.verify(&expect(register.user_email.invalid_text.clone()).to_be_hidden())
        .await
}

/// Each complexity rule produces its exact message; a compliant
/// password produces none of them
pub async fn password_complexity(session: &RegisterSession) -> SondarResult<()> {
    let page = &session.page;
    let register = &session.register;

    for (password, message) in data::INVALID_PASSWORDS {
        page.fill(&register.password.input, password).await?;
        page.click(&register.next_button).await?;
        let message_text = Locator::from_selector(Selector::text(*message));
        page.verify(&expect(message_text).to_be_visible()).await?;
        page.clear(&register.password.input).await?;
    }

    page.fill(&register.password.input, data::VALID_PASSWORD)
        .await?;
    page.click(&register.next_button).await?;
    page.verify(&expect(register.password.error_text.clone()).to_be_hidden())
        .await?;
    for (_, message) in data::INVALID_PASSWORDS {
        let message_text = Locator::from_selector(Selector::text(*message));
        page.verify(&expect(message_text).to_be_hidden()).await?;
    }
    Ok(())
}

/// A non-matching confirm password is flagged; a matching one is not.
///
/// The mismatch branch asserts a placeholder locator; the form shows
/// no dedicated mismatch message today.
pub async fn confirm_password_matching(session: &RegisterSession) -> SondarResult<()> {
    let page = &session.page;
    let register = &session.register;

    page.fill(&register.password.input, data::VALID_PASSWORD)
        .await?;
    page.fill(&register.confirm_password.input, data::MISMATCH_PASSWORD)
        .await?;
    page.click(&register.next_button).await?;
    page.verify(&expect(register.password_mismatch_text.clone()).to_be_visible())
        .await?;
    page.clear(&register.confirm_password.input).await?;

    page.fill(&register.confirm_password.input, data::VALID_PASSWORD)
        .await?;
    page.click(&register.next_button).await?;
    page.verify(&expect(register.confirm_password.error_text.clone()).to_be_hidden())
        .await
}

/// While any field is invalid, Next leaves the details tab active.
///
/// Each round breaks exactly one field, keeping the rest valid. The
/// second round checks the tab without clicking Next first; the
/// sequence is preserved as-is from the manual exploration that shaped
/// this flow.
pub async fn submission_gate(session: &RegisterSession) -> SondarResult<()> {
    let page = &session.page;
    let register = &session.register;

    // Round 1: everything valid except Your Name (left empty)
    page.fill(&register.company_name.input, "Valid company")
        .await?;
    page.fill(&register.user_email.input, &data::unique_email())
        .await?;
    page.fill(&register.password.input, data::VALID_PASSWORD)
        .await?;
    page.fill(&register.confirm_password.input, data::VALID_PASSWORD)
        .await?;
    page.check(&register.accept_tandcs_checkbox).await?;
    page.click(&register.next_button).await?;
    register.validate_details_tab_active(page).await?;

    // Round 2: fix Your Name, break Company Name
    page.fill(&register.your_name.input, "Valid name").await?;
    page.clear(&register.company_name.input).await?;
    register.validate_details_tab_active(page).await?;

    // Round 3: fix Company Name, break email
    page.fill(&register.company_name.input, "Valid company")
        .await?;
    page.clear(&register.user_email.input).await?;
    page.click(&register.next_button).await?;
    register.validate_details_tab_active(page).await?;

    // Round 4: fix email, break password
    page.fill(&register.user_email.input, &data::unique_email())
        .await?;
    page.clear(&register.password.input).await?;
    page.click(&register.next_button).await?;
    register.validate_details_tab_active(page).await?;

    // Round 5: fix password, break confirm password
    page.fill(&register.password.input, data::VALID_PASSWORD)
        .await?;
    page.clear(&register.confirm_password.input).await?;
    page.click(&register.next_button).await?;
    register.validate_details_tab_active(page).await?;

    // Round 6: fix confirm password, withdraw terms acceptance
    page.fill(&register.confirm_password.input, data::VALID_PASSWORD)
        .await?;
    page.uncheck(&register.accept_tandcs_checkbox).await?;
    page.click(&register.next_button).await?;
    register.validate_details_tab_active(page).await
}

/// A fully valid form advances to the upload-feeds page
pub async fn happy_path(session: &RegisterSession) -> SondarResult<()> {
    let page = &session.page;
    let register = &session.register;

    page.fill(&register.your_name.input, "Test User").await?;
    page.fill(&register.company_name.input, "Test Company")
        .await?;
    page.select_option(&register.company_type_dropdown, "Agency")
        .await?;
    page.fill(&register.user_email.input, &data::unique_email())
        .await?;
    page.fill(&register.password.input, data::VALID_PASSWORD)
        .await?;
    page.fill(&register.confirm_password.input, data::VALID_PASSWORD)
        .await?;
    page.check(&register.accept_tandcs_checkbox).await?;
    page.click(&register.next_button).await?;

    // The following page is identified by its one distinctive element
    let upload_feeds = upload_feeds_page();
    let heading = upload_feeds
        .locator("heading")
        .cloned()
        .ok_or_else(|| SondarError::InvalidState {
            message: "upload-feeds page object has no heading locator".to_string(),
        })?;
    page.verify(&expect(heading).to_be_visible()).await
}
