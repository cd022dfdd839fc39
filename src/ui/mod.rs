pub mod list_view;
pub mod swatches;
pub mod colors;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use huelist::app::App;

pub fn render(f: &mut Frame, app: &App) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),       // main: list + swatches
            Constraint::Length(1),     // status bar
        ])
        .split(f.area());

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(62),  // list
            Constraint::Percentage(38),  // swatches
        ])
        .split(outer[0]);

    list_view::render(f, app, main[0]);
    swatches::render(f, app, main[1]);
    render_status_bar(f, app, outer[1]);
}

fn render_status_bar(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    use ratatui::style::{Color, Style};
    use ratatui::text::{Line, Span};
    use ratatui::widgets::Paragraph;

    let status = Line::from(vec![
        Span::styled(" [q]", Style::default().fg(Color::DarkGray)),
        Span::raw("uit "),
        Span::styled("[j/k]", Style::default().fg(Color::DarkGray)),
        Span::raw("nav "),
        Span::styled("[g/G]", Style::default().fg(Color::DarkGray)),
        Span::raw("jump "),
        Span::styled("[r]", Style::default().fg(Color::DarkGray)),
        Span::raw("everse "),
        Span::styled("[tab]", Style::default().fg(Color::DarkGray)),
        Span::raw("focus "),
        Span::raw(format!(" {} → {}", app.start.to_hex(), app.end.to_hex())),
    ]);

    f.render_widget(
        Paragraph::new(status).style(Style::default().bg(Color::DarkGray).fg(Color::White)),
        area,
    );
}
