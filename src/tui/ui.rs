use crate::core::field::Field;
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::submit_button::{BUTTON_HEIGHT, BUTTON_WIDTH};
use crate::tui::components::{ErrorList, Header, Summary};
use crate::tui::{Focus, TuiState};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

/// Widest the form column grows, in terminal cells.
pub const FORM_WIDTH: u16 = 60;

/// Draw the whole form and record clickable areas in `tui.hit_areas`.
///
/// ```text
/// Contact Form | status
/// ╭First Name*╮  ╭Last Name*╮  ╭Email*╮  ╭Message╮
/// Error: ...            (one line per visible error, wrapped to fit)
/// ╭ Submit ╮
/// ╭You Submitted:╮      (after a valid submit)
/// ```
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let full = frame.area();
    let area = Rect {
        width: full.width.min(FORM_WIDTH),
        ..full
    };

    let mut error_list = ErrorList::new(app.visible_errors());
    let mut summary = app.submission.as_ref().map(Summary::new);

    let mut constraints = vec![Constraint::Length(1)];
    constraints.extend(tui.fields.iter().map(|f| Constraint::Length(f.height())));
    constraints.push(Constraint::Length(error_list.height(area.width)));
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Length(
        summary.as_ref().map_or(0, |s| s.height(area.width)),
    ));
    constraints.push(Constraint::Min(0));

    let rows = Layout::vertical(constraints).split(area);
    let field_rows = &rows[1..=Field::ALL.len()];
    let errors_row = rows[Field::ALL.len() + 1];
    let button_row = rows[Field::ALL.len() + 2];
    let summary_row = rows[Field::ALL.len() + 3];

    tui.hit_areas.clear();

    Header::new(app.title.clone(), app.status_message.clone()).render(frame, rows[0]);

    for (field, row) in tui.fields.iter_mut().zip(field_rows) {
        field.status = app.field_status(field.field);
        field.focused = tui.focus == Focus::Field(field.field);
        field.render(frame, *row);
        tui.hit_areas.push((Focus::Field(field.field), *row));
    }

    error_list.render(frame, errors_row);

    let button_area = Rect {
        width: button_row.width.min(BUTTON_WIDTH),
        ..button_row
    };
    tui.button.focused = tui.focus == Focus::Submit;
    tui.button.render(frame, button_area);
    tui.hit_areas.push((Focus::Submit, button_area));

    if let Some(summary) = summary.as_mut() {
        summary.render(frame, summary_row);
    }
}

/// Which control (if any) sits at screen position `(col, row)`.
pub fn hit_test(hit_areas: &[(Focus, Rect)], col: u16, row: u16) -> Option<Focus> {
    hit_areas
        .iter()
        .find(|(_, rect)| {
            rect.height > 0
                && col >= rect.x
                && col < rect.x + rect.width
                && row >= rect.y
                && row < rect.y + rect.height
        })
        .map(|(focus, _)| *focus)
}
