use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

use huelist::app::{App, FocusPanel, ListRow};
use huelist::decorate::BORDER_GLYPH;

use super::colors;

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let border_style = if app.startup {
        Style::default().fg(colors::STARTUP_DIM)
    } else if app.focus == FocusPanel::List {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title(format!(" {} ", app.source_name))
        .borders(Borders::ALL)
        .border_style(border_style);

    let items: Vec<ListItem> = app
        .rows
        .iter()
        .map(|row| match row {
            ListRow::Spacer => ListItem::new(""),
            ListRow::Item { text, color, .. } => ListItem::new(Line::from(vec![
                Span::styled(BORDER_GLYPH, Style::default().fg(Color::from(*color))),
                Span::raw(" "),
                Span::styled(text.as_str(), Style::default().fg(colors::ITEM_TEXT)),
            ])),
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(app.selected_row));

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(colors::HIGHLIGHT_BG)
            .fg(colors::HIGHLIGHT_FG)
            .add_modifier(Modifier::BOLD),
    );

    f.render_stateful_widget(list, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use huelist::color::Rgb;
    use huelist::items::ListGroup;

    fn test_app() -> App {
        let groups = vec![ListGroup {
            items: vec!["alpha".into(), "beta".into(), "gamma".into()],
        }];
        App::new(
            groups,
            "demo.txt".into(),
            Rgb::new(0, 225, 255),
            Rgb::new(255, 30, 0),
        )
    }

    /// Find the foreground color of the first cell in `row` that starts `text`.
    fn fg_color_of(backend: &TestBackend, row: u16, text: &str) -> Option<Color> {
        let buf = backend.buffer();
        let cells: Vec<String> = (0..buf.area.width)
            .map(|x| buf[(x, row)].symbol().to_string())
            .collect();
        let row_str = cells.concat();
        let byte_idx = row_str.find(text)?;

        // Symbols can be multi-byte, so walk cells to map the byte offset
        // back onto a column.
        let mut consumed = 0;
        for (x, cell) in cells.iter().enumerate() {
            if consumed == byte_idx {
                return Some(buf[(x as u16, row)].fg);
            }
            consumed += cell.len();
        }
        None
    }

    fn draw(app: &App) -> Terminal<TestBackend> {
        let backend = TestBackend::new(40, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, app, f.area())).unwrap();
        terminal
    }

    #[test]
    fn first_border_glyph_has_start_color() {
        let mut app = test_app();
        app.startup = false;
        // Park the selection on the last item so row 1 isn't highlighted.
        app.selected_row = 4;
        let terminal = draw(&app);

        let color = fg_color_of(terminal.backend(), 1, BORDER_GLYPH).unwrap();
        assert_eq!(color, Color::Rgb(0, 225, 255));
    }

    #[test]
    fn midpoint_border_glyph_is_gray() {
        let mut app = test_app();
        app.startup = false;
        let terminal = draw(&app);

        // Screen row 3 holds the second item ("beta").
        let color = fg_color_of(terminal.backend(), 3, BORDER_GLYPH).unwrap();
        assert_eq!(color, Color::Rgb(128, 128, 128));
    }

    #[test]
    fn last_border_glyph_has_end_color() {
        let mut app = test_app();
        app.startup = false;
        let terminal = draw(&app);

        let color = fg_color_of(terminal.backend(), 5, BORDER_GLYPH).unwrap();
        assert_eq!(color, Color::Rgb(255, 30, 0));
    }

    #[test]
    fn spacer_rows_render_blank() {
        let mut app = test_app();
        app.startup = false;
        let terminal = draw(&app);

        let buf = terminal.backend().buffer();
        for x in 1..buf.area.width - 1 {
            assert_eq!(buf[(x, 2)].symbol(), " ", "column {x} not blank");
        }
    }

    #[test]
    fn highlighted_row_uses_highlight_colors() {
        let mut app = test_app();
        app.startup = false;
        let terminal = draw(&app);

        let color = fg_color_of(terminal.backend(), 1, "alpha").unwrap();
        assert_eq!(color, colors::HIGHLIGHT_FG);
    }

    #[test]
    fn item_text_uses_the_shared_text_color() {
        let mut app = test_app();
        app.startup = false;
        let terminal = draw(&app);

        let color = fg_color_of(terminal.backend(), 3, "beta").unwrap();
        assert_eq!(color, colors::ITEM_TEXT);
    }

    #[test]
    fn startup_border_is_dimmed_until_ready() {
        let mut app = test_app();
        let terminal = draw(&app);
        let buf = terminal.backend().buffer();
        assert_eq!(buf[(0, 0)].fg, colors::STARTUP_DIM);

        app.on_ready(|a| a.startup = false);
        app.fire_ready();
        let terminal = draw(&app);
        let buf = terminal.backend().buffer();
        assert_eq!(buf[(0, 0)].fg, Color::Cyan);
    }
}
