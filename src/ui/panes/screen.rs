//! Body of the pager display: one list of lines per screen

use crate::nav::digit_editor::LAST_DIGIT;
use crate::nav::hex::CODE_LEN;
use crate::nav::registry::{self, FriendsEntry, MAIN_MENU};
use crate::nav::{AddFriendMode, AddFriendState, AddMethod, HexCode, NavigationState, Screen};
use crate::services::{ListDataSource, OnlineStatus};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Everything the body needs besides the navigation state
pub struct ScreenRenderData<'a, D: ListDataSource> {
    pub state: &'a NavigationState,
    pub data: &'a D,
    pub my_code: Option<HexCode>,
}

fn row(text: String, selected: bool) -> Line<'static> {
    if selected {
        Line::from(Span::styled(
            format!("> {}", text),
            Style::default()
                .bg(DEFAULT_THEME.highlight)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            format!("  {}", text),
            Style::default().fg(DEFAULT_THEME.fg),
        ))
    }
}

fn hint(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(DEFAULT_THEME.dim),
    ))
}

/// Lines for the current screen
pub fn screen_lines<D: ListDataSource>(render: &ScreenRenderData<'_, D>) -> Vec<Line<'static>> {
    let selected = render.state.selected_index();
    match render.state.screen() {
        Screen::Main => MAIN_MENU
            .iter()
            .enumerate()
            .map(|(i, item)| row(item.label.to_string(), i == selected))
            .collect(),
        Screen::Messages => {
            let messages = render.data.messages();
            if messages.is_empty() {
                return vec![hint("NO MESSAGES")];
            }
            messages
                .iter()
                .enumerate()
                .map(|(i, message)| {
                    row(
                        format!(
                            "{} {} {}",
                            message.received_at.format("%H:%M"),
                            message.sender,
                            message.text
                        ),
                        i == selected,
                    )
                })
                .collect()
        }
        Screen::Friends => friends_lines(render.data, selected),
        Screen::AddFriend(add_friend) => add_friend_lines(add_friend),
        Screen::FriendRequests => {
            let requests = render.data.pending_requests();
            if requests.is_empty() {
                return vec![hint("NO PENDING REQUESTS")];
            }
            requests
                .iter()
                .enumerate()
                .map(|(i, request)| {
                    row(
                        format!("{} {}", request.code, request.received_at.format("%m/%d %H:%M")),
                        i == selected,
                    )
                })
                .collect()
        }
        Screen::MyCode => match render.my_code {
            Some(code) => vec![
                hint("SHARE THIS CODE"),
                Line::from(""),
                Line::from(Span::styled(
                    code.to_string(),
                    Style::default()
                        .fg(DEFAULT_THEME.accent)
                        .add_modifier(Modifier::BOLD),
                )),
            ],
            None => vec![hint("NO CODE ASSIGNED")],
        },
        Screen::Settings => vec![
            hint(concat!("PAGERLINK ", env!("CARGO_PKG_VERSION"))),
            hint("↑/↓ k/j  ↵ SELECT  ⌫ BACK  m MENU"),
        ],
    }
}

fn friends_lines<D: ListDataSource>(data: &D, selected: usize) -> Vec<Line<'static>> {
    let counts = data.counts();
    let friends = data.friends();
    (0..registry::friends_entry_count(counts))
        .filter_map(|i| {
            let text = match registry::friends_entry(i, counts)? {
                FriendsEntry::AddFriend => "+ ADD FRIEND".to_string(),
                FriendsEntry::Requests => format!("REQUESTS ({})", counts.pending),
                FriendsEntry::Friend(index) => {
                    let friend = friends.get(index)?;
                    let marker = match friend.status {
                        OnlineStatus::Online => '●',
                        OnlineStatus::Offline => '○',
                    };
                    format!("{} {}", marker, friend.code)
                }
            };
            Some(row(text, i == selected))
        })
        .collect()
}

fn add_friend_lines(add_friend: &AddFriendState) -> Vec<Line<'static>> {
    match add_friend.mode() {
        AddFriendMode::Choosing => {
            let mut lines = vec![
                row("PASTE CODE".to_string(), add_friend.method() == AddMethod::Paste),
                row("ENTER CODE".to_string(), add_friend.method() == AddMethod::Manual),
            ];
            if add_friend.paste_error() {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "NO VALID CODE ON CLIPBOARD",
                    Style::default().fg(DEFAULT_THEME.error),
                )));
            }
            lines
        }
        AddFriendMode::Manual | AddFriendMode::PasteResult => {
            let digits = add_friend.digits();
            let spans: Vec<Span<'static>> = (0..CODE_LEN)
                .map(|position| {
                    let ch = digits.digit(position).unwrap_or('0');
                    let style = if position == add_friend.digit_index() {
                        Style::default()
                            .fg(DEFAULT_THEME.accent)
                            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
                    } else {
                        Style::default().fg(DEFAULT_THEME.fg)
                    };
                    Span::styled(format!("{} ", ch), style)
                })
                .collect();
            let prompt = if add_friend.digit_index() == LAST_DIGIT {
                "↵ SEND REQUEST"
            } else {
                "↵ NEXT DIGIT"
            };
            vec![Line::from(spans), Line::from(""), hint(prompt)]
        }
    }
}

/// Render the pager body inside a bordered box
pub fn render_screen<D: ListDataSource>(
    frame: &mut Frame,
    area: Rect,
    render: &ScreenRenderData<'_, D>,
) {
    let title = Line::from(Span::styled(
        format!(" {} ", render.state.kind().title()),
        Style::default()
            .fg(DEFAULT_THEME.accent)
            .add_modifier(Modifier::BOLD),
    ));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.dim))
        .title(title)
        .title_alignment(Alignment::Center)
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(DEFAULT_THEME.bg));

    let paragraph = Paragraph::new(screen_lines(render)).block(block);
    frame.render_widget(paragraph, area);
}
