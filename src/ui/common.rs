//! Chrome around the chart: title, instructions, status bar and help overlay.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;

/// Render the algorithm and direction, centered.
pub fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let title = Paragraph::new(Span::styled(app.title(), app.theme.title))
        .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

/// Render the two static instruction lines.
pub fn render_instructions(frame: &mut Frame, app: &App, area: Rect) {
    let lines = vec![
        Line::from("R - Reset | SPACE - Start Sorting | A - Ascending | D - Descending"),
        Line::from(
            "I - Insertion Sort | B - Bubble Sort | S - Selection Sort | M - Merge Sort | Q - Quick Sort",
        ),
    ];
    let paragraph = Paragraph::new(lines)
        .style(app.theme.instructions)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Render the status bar at the bottom.
///
/// Shows: session state, array size (and how many bars fit), steps taken,
/// last pivot.
/// Temporary status messages take precedence.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(msg) = app.get_status_message() {
        let paragraph =
            Paragraph::new(format!(" {} ", msg)).style(Style::default().fg(app.theme.highlight));
        frame.render_widget(paragraph, area);
        return;
    }

    let total = app.array().len();
    let visible = app.visible_bars();
    let bars = if visible < total {
        format!("showing {} of {} bars", visible, total)
    } else {
        format!("{} bars", total)
    };
    let mut status = format!(
        " {} | {} | steps: {}",
        app.state().label(),
        bars,
        app.steps_taken()
    );
    if let Some(pivot) = app.last_pivot() {
        status.push_str(&format!(" | pivot: {}", pivot));
    }
    status.push_str(" | ?:help Esc:quit");

    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the chart.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            app.theme.title,
        )]),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Sorting",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  Space     Start sorting"),
        Line::from("  r         Reset (cancels a sort)"),
        Line::from("  a / d     Ascending / descending"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Algorithms (while idle)",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  b         Bubble sort"),
        Line::from("  i         Insertion sort"),
        Line::from("  s         Selection sort"),
        Line::from("  m         Merge sort"),
        Line::from("  q         Quick sort"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " General",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  ?         Toggle help"),
        Line::from("  Esc       Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);

    // Center the help overlay - responsive to terminal size
    let help_width = 40u16.min(area.width.saturating_sub(4));
    let help_height = 22u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    // Clear the area behind the help
    frame.render_widget(Clear, help_area);
    frame.render_widget(paragraph, help_area);
}
