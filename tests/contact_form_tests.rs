use contact_form::core::action::Effect;
use contact_form::core::config::ResolvedConfig;
use contact_form::core::field::Field;
use contact_form::core::state::{App, FormPhase};
use contact_form::tui::event::TuiEvent;
use contact_form::tui::{Focus, TuiState, draw_ui, handle_event};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

// ============================================================================
// Helper Functions
// ============================================================================

struct Harness {
    app: App,
    tui: TuiState,
    terminal: Terminal<TestBackend>,
}

impl Harness {
    fn new() -> Self {
        let config = ResolvedConfig::default();
        Self {
            app: App::from_config(&config),
            tui: TuiState::new(&config),
            terminal: Terminal::new(TestBackend::new(80, 40)).unwrap(),
        }
    }

    /// Focus `field` and type `text` one key at a time.
    fn type_into(&mut self, field: Field, text: &str) {
        self.tui.focus = Focus::Field(field);
        for c in text.chars() {
            handle_event(&mut self.app, &mut self.tui, TuiEvent::InputChar(c));
        }
    }

    fn press(&mut self, event: TuiEvent) -> Effect {
        handle_event(&mut self.app, &mut self.tui, event)
    }

    /// Focus the Submit button and press Enter.
    fn click_submit(&mut self) -> Effect {
        self.tui.focus = Focus::Submit;
        self.press(TuiEvent::Enter)
    }

    /// Draw a frame and return the screen, one string per row.
    fn screen(&mut self) -> Vec<String> {
        let Harness { app, tui, terminal } = self;
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect()
    }

    fn screen_text(&mut self) -> String {
        self.screen().join("\n")
    }

    /// Text of the summary block with borders and whitespace removed, so
    /// values that wrap across rows can be searched as one string.
    fn summary_text(&mut self) -> String {
        self.screen()
            .into_iter()
            .skip_while(|row| !row.contains("You Submitted:"))
            .skip(1)
            .flat_map(|row| row.chars().collect::<Vec<_>>())
            .filter(|c| !c.is_whitespace() && !"│╭╮╰╯─".contains(*c))
            .collect()
    }

    fn error_rows(&mut self) -> Vec<String> {
        self.screen()
            .into_iter()
            .filter(|row| row.starts_with("Error: "))
            .map(|row| row.trim_end().to_string())
            .collect()
    }
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_renders_without_errors() {
    let mut h = Harness::new();
    h.screen();
    assert!(h.error_rows().is_empty());
}

#[test]
fn test_renders_contact_form_header() {
    let mut h = Harness::new();
    let screen = h.screen();
    assert!(screen[0].to_lowercase().contains("contact form"));
}

#[test]
fn test_fields_are_addressable_by_label_and_placeholder() {
    let mut h = Harness::new();
    let text = h.screen_text();
    for label in ["First Name*", "Last Name*", "Email*", "Message"] {
        assert!(text.contains(label), "missing label {label}");
    }
    for placeholder in ["Edd", "Burke", "bluebill1049@hotmail.com"] {
        assert!(text.contains(placeholder), "missing placeholder {placeholder}");
    }
    assert!(text.contains("Submit"));
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_one_error_when_first_name_shorter_than_five() {
    let mut h = Harness::new();
    h.type_into(Field::FirstName, "asdf");
    assert_eq!(
        h.error_rows(),
        vec!["Error: firstName must have at least 5 characters"]
    );
}

#[test]
fn test_three_errors_when_submitting_empty_form() {
    let mut h = Harness::new();
    assert_eq!(h.click_submit(), Effect::Rejected);
    assert_eq!(h.error_rows().len(), 3);
    assert_eq!(h.app.phase, FormPhase::Rejected(3));
}

#[test]
fn test_error_when_email_missing() {
    let mut h = Harness::new();
    h.type_into(Field::FirstName, "Jessica");
    h.type_into(Field::LastName, "Ambrocio");
    h.click_submit();
    let errors = h.error_rows();
    assert_eq!(errors, vec!["Error: email is a required field"]);
    assert!(h.app.submission.is_none());
}

#[test]
fn test_invalid_email_message() {
    let mut h = Harness::new();
    h.type_into(Field::Email, "asdf");
    assert!(
        h.screen_text()
            .contains("email must be a valid email address")
    );
}

#[test]
fn test_email_with_display_name_is_invalid() {
    let mut h = Harness::new();
    h.type_into(Field::FirstName, "Jessica");
    h.type_into(Field::LastName, "Ambrocio");
    h.type_into(Field::Email, "Jessica <asd@gmail.com>");
    assert_eq!(
        h.error_rows(),
        vec!["Error: email must be a valid email address"]
    );
    assert_eq!(h.click_submit(), Effect::Rejected);
    assert!(h.app.submission.is_none());
}

#[test]
fn test_last_name_required_on_submit() {
    let mut h = Harness::new();
    h.click_submit();
    assert!(h.screen_text().contains("lastName is a required field"));
}

#[test]
fn test_never_two_errors_for_one_field() {
    let mut h = Harness::new();
    h.type_into(Field::FirstName, "a");
    h.click_submit();
    let first_name_errors = h
        .error_rows()
        .into_iter()
        .filter(|row| row.contains("firstName"))
        .count();
    assert_eq!(first_name_errors, 1);
}

#[test]
fn test_fixing_fields_clears_their_errors() {
    let mut h = Harness::new();
    h.click_submit();
    h.type_into(Field::FirstName, "Jessica");
    h.type_into(Field::LastName, "Ambrocio");
    assert_eq!(h.error_rows(), vec!["Error: email is a required field"]);
}

// ============================================================================
// Submission
// ============================================================================

#[test]
fn test_submission_without_message() {
    let mut h = Harness::new();
    h.type_into(Field::FirstName, "Jessica");
    h.type_into(Field::LastName, "Ambrocio");
    h.type_into(Field::Email, "asd@gmail.com");
    assert_eq!(h.click_submit(), Effect::Submitted);

    let text = h.screen_text();
    assert!(text.contains("You Submitted:"));
    assert!(text.contains("First Name: Jessica"));
    assert!(text.contains("Last Name: Ambrocio"));
    assert!(text.contains("Email: asd@gmail.com"));
    assert!(!text.contains("Message: "));
    assert!(h.error_rows().is_empty());
}

#[test]
fn test_submission_with_message() {
    let mut h = Harness::new();
    h.type_into(Field::FirstName, "Jessica");
    h.type_into(Field::LastName, "Ambrocio");
    h.type_into(Field::Email, "asd@gmail.com");
    h.type_into(Field::Message, "text");
    h.click_submit();

    let text = h.screen_text();
    assert!(text.contains("Jessica"));
    assert!(text.contains("Ambrocio"));
    assert!(text.contains("asd@gmail.com"));
    assert!(text.contains("Message: text"));
}

#[test]
fn test_summary_shows_long_values_in_full() {
    let message = "The quick brown fox jumps over the lazy dog and keeps running ENDMARK";
    let email = "jessica.ambrocio.with.a.long.address@mail.example-company.com";
    let mut h = Harness::new();
    h.type_into(Field::FirstName, "Jessica");
    h.type_into(Field::LastName, "Ambrocio");
    h.type_into(Field::Email, email);
    h.type_into(Field::Message, message);
    assert_eq!(h.click_submit(), Effect::Submitted);

    let summary = h.summary_text();
    let squeeze = |s: &str| s.split_whitespace().collect::<String>();
    assert!(summary.contains(&format!("Email:{email}")), "{summary}");
    assert!(summary.contains(&squeeze(&format!("Message: {message}"))), "{summary}");
    assert!(summary.ends_with("ENDMARK"), "{summary}");
}

#[test]
fn test_summary_ignores_later_edits() {
    let mut h = Harness::new();
    h.type_into(Field::FirstName, "Jessica");
    h.type_into(Field::LastName, "Ambrocio");
    h.type_into(Field::Email, "asd@gmail.com");
    h.click_submit();

    h.type_into(Field::LastName, "Smith");
    assert_eq!(h.app.phase, FormPhase::Editing);
    assert!(h.screen_text().contains("Last Name: Ambrocio"));
}

#[test]
fn test_ctrl_s_submits_from_any_field() {
    let mut h = Harness::new();
    h.type_into(Field::FirstName, "Jessica");
    h.type_into(Field::LastName, "Ambrocio");
    h.type_into(Field::Email, "asd@gmail.com");
    assert_eq!(h.press(TuiEvent::Submit), Effect::Submitted);
    assert!(h.app.submission.is_some());
}

#[test]
fn test_clicking_submit_button() {
    let mut h = Harness::new();
    h.screen(); // lay out hit areas
    let (_, button) = *h
        .tui
        .hit_areas
        .iter()
        .find(|(focus, _)| *focus == Focus::Submit)
        .unwrap();
    let effect = h.press(TuiEvent::MouseClick(button.x + 1, button.y + 1));
    assert_eq!(effect, Effect::Rejected);
    assert_eq!(h.tui.focus, Focus::Field(Field::FirstName));
}

#[test]
fn test_tab_walks_every_control() {
    let mut h = Harness::new();
    let mut seen = vec![h.tui.focus];
    for _ in 0..4 {
        h.press(TuiEvent::FocusNext);
        seen.push(h.tui.focus);
    }
    assert_eq!(
        seen,
        vec![
            Focus::Field(Field::FirstName),
            Focus::Field(Field::LastName),
            Focus::Field(Field::Email),
            Focus::Field(Field::Message),
            Focus::Submit,
        ]
    );
}
