use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::color::Rgb;
use crate::items::ListGroup;

/// Default gradient endpoints used across tests.
pub fn test_endpoints() -> (Rgb, Rgb) {
    (Rgb::new(0, 225, 255), Rgb::new(255, 30, 0))
}

/// Create a ListGroup from string slices.
pub fn group(items: &[&str]) -> ListGroup {
    ListGroup {
        items: items.iter().map(|s| s.to_string()).collect(),
    }
}

/// Create several groups at once.
pub fn group_list(lists: &[&[&str]]) -> Vec<ListGroup> {
    lists.iter().map(|items| group(items)).collect()
}

/// Create an App over the given lists with the default endpoints.
pub fn make_app(lists: &[&[&str]]) -> App {
    let (start, end) = test_endpoints();
    App::new(group_list(lists), "test.txt".to_string(), start, end)
}

/// Key event without modifiers.
pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}
