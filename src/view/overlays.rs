//! Overlay rendering (notice, book detail, help popup)

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::model::{AppState, BookDetail};
use super::utils::clip_description;

const DESCRIPTION_LIMIT: usize = 500;

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    Rect {
        x: area.width.saturating_sub(width) / 2,
        y: area.height.saturating_sub(height) / 2,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

pub fn render_notice(frame: &mut Frame, state: &AppState) {
    // Fetch errors outrank persistence warnings
    let (message, title, color) = match (&state.error_message, &state.warning) {
        (Some(error), _) => (error, " Notice (Esc to dismiss) ", Color::Red),
        (None, Some(warning)) => (warning, " Warning (Esc to dismiss) ", Color::Yellow),
        (None, None) => return,
    };

    let area = frame.area();
    let popup_width = 52.min(area.width.saturating_sub(4));
    let inner_width = popup_width.saturating_sub(4).max(1) as usize;
    let line_count = message.chars().count().div_ceil(inner_width).max(1) as u16;
    let popup_height = (2 + line_count).min(area.height.saturating_sub(4));

    let popup_area = centered(area, popup_width, popup_height);
    frame.render_widget(Clear, popup_area);

    let widget = Paragraph::new(message.to_string())
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title(title)
                .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
                .style(Style::default().bg(Color::Black)),
        );

    frame.render_widget(widget, popup_area);
}

pub fn render_book_detail(frame: &mut Frame, detail: &BookDetail, is_favorite: bool) {
    let area = frame.area();
    let popup_width = 80.min(area.width.saturating_sub(4));
    let popup_height = area.height.saturating_sub(4).min(24);
    let popup_area = centered(area, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let label = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let field = |name: &'static str, value: &str| {
        Line::from(vec![
            Span::styled(format!("{:<16}", name), label),
            Span::raw(value.to_string()),
        ])
    };

    let favorite_line = if is_favorite {
        Span::styled("♥ In favorites (f to remove)", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
    } else {
        Span::styled("☆ Not a favorite (f to add)", Style::default().fg(Color::Gray))
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!("By: {}", detail.summary.authors),
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        field("Publisher:", &detail.publisher),
        field("Published Date:", &detail.published_date),
        field("Page Count:", &detail.page_count),
        field("ISBN-13:", &detail.isbn),
    ];

    if let Some(ref cover) = detail.summary.cover_image_url {
        lines.push(field("Cover:", cover));
    }
    if let Some(ref preview) = detail.preview_link {
        lines.push(field("Preview:", preview));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Description", label)));
    lines.push(Line::from(Span::styled(
        clip_description(&detail.description, DESCRIPTION_LIMIT),
        Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(favorite_line));

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(format!(" {} ", detail.summary.title))
                .title_bottom(Line::from(" Esc close · f favorite ").right_aligned())
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .style(Style::default().bg(Color::Black)),
        );

    frame.render_widget(widget, popup_area);
}

pub fn render_help_popup(frame: &mut Frame) {
    let area = frame.area();

    let keybindings = vec![
        ("", "── Search ──"),
        ("Type", "Edit search text"),
        ("Enter", "Search"),
        ("Esc", "Clear search text"),
        ("", ""),
        ("", "── Results ──"),
        ("↑ / ↓", "Move selection"),
        ("Enter", "Show book details"),
        ("← / [", "Previous page"),
        ("→ / ]", "Next page"),
        ("F", "Add / remove favorite"),
        ("Esc / /", "Back to search"),
        ("", ""),
        ("", "── General ──"),
        ("Tab / Shift+Tab", "Switch section"),
        ("H", "Toggle this help"),
        ("Q / Ctrl+Q", "Quit"),
    ];

    let popup_width = 62;
    let popup_height = (keybindings.len() as u16 + 2).min(area.height.saturating_sub(4));
    let popup_area = centered(area, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let lines: Vec<Line> = keybindings
        .iter()
        .map(|(key, desc)| {
            if key.is_empty() {
                Line::from(Span::styled(
                    format!("{:^38}", desc),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("{:>18}", key),
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(desc.to_string(), Style::default().fg(Color::White)),
                ])
            }
        })
        .collect();

    let help_text = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help (H or Esc to close) ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(help_text, popup_area);
}
