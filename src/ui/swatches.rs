use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use huelist::app::{App, FocusPanel};

use super::colors;

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let border_style = if app.startup {
        Style::default().fg(colors::STARTUP_DIM)
    } else if app.focus == FocusPanel::Swatches {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title(" Gradient ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("  Start: "),
            Span::styled(
                app.start.to_hex(),
                Style::default().fg(Color::from(app.start)),
            ),
        ]),
        Line::from(vec![
            Span::raw("  End:   "),
            Span::styled(app.end.to_hex(), Style::default().fg(Color::from(app.end))),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw("  Groups: "),
            Span::styled(
                format!("{}", app.groups.len()),
                Style::default().fg(Color::White),
            ),
            Span::raw("  Items: "),
            Span::styled(
                format!("{}", app.total_items()),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
    ];

    // Swatch column for the group under the cursor.
    if let Some(g) = app.selected_group() {
        if let Some(group) = app.decorated.get(g) {
            lines.push(Line::from(Span::styled(
                format!("  Group {} of {}", g + 1, app.decorated.len()),
                Style::default().fg(Color::DarkGray),
            )));
            for item in &group.items {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled("██", Style::default().fg(Color::from(item.color))),
                    Span::styled(
                        format!(" {}", item.color.to_hex()),
                        Style::default().fg(colors::ACCENT_MUTED),
                    ),
                ]));
            }
        }
    }

    // Selected item detail.
    if let Some(item) = app.selected_item() {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw("  Selected: "),
            Span::styled(
                item.color.to_hex(),
                Style::default()
                    .fg(Color::from(item.color))
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(block);
    f.render_widget(paragraph, area);
}
