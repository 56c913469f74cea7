//! Status bar rendering with key hints

use crate::nav::{AddFriendMode, NavigationState, ScreenKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// What select/back do on the current screen, for the hint chips
fn action_labels(state: &NavigationState) -> (&'static str, &'static str) {
    match state.kind() {
        ScreenKind::Main => ("open", "-"),
        ScreenKind::FriendRequests => ("accept", "reject"),
        ScreenKind::AddFriend => match state.add_friend().map(|a| a.mode()) {
            Some(AddFriendMode::Choosing) | None => ("choose", "home"),
            Some(AddFriendMode::Manual) | Some(AddFriendMode::PasteResult) => ("next", "prev"),
        },
        _ => ("open", "home"),
    }
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, message: &str, state: &NavigationState) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let left_spans = vec![
        Span::styled(
            format!(" {} ", state.kind().title()),
            Style::default()
                .bg(DEFAULT_THEME.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    let key_style = Style::default().bg(DEFAULT_THEME.key_bg).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.dim);

    let (select_label, back_label) = action_labels(state);
    let right_spans = vec![
        Span::styled(" ↑/↓ ", key_style),
        Span::styled(" move ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ↵ ", key_style),
        Span::styled(format!(" {} ", select_label), desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ⌫ ", key_style),
        Span::styled(format!(" {} ", back_label), desc_style),
        Span::styled("│", sep_style),
        Span::styled(" m ", key_style),
        Span::styled(" menu ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" q ", key_style),
        Span::styled(" quit ", desc_style),
    ];

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
