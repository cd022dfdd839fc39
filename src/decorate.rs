use crate::color::Rgb;
use crate::gradient::{self, GradientSpec};
use crate::items::ListGroup;

/// Left-border glyph drawn in each item's gradient color.
pub const BORDER_GLYPH: &str = "▌";

/// One list item with its assigned gradient color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoratedItem {
    pub text: String,
    pub color: Rgb,
    /// False exactly on the first item of a group.
    pub spacer_above: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoratedGroup {
    pub items: Vec<DecoratedItem>,
}

/// Assign one gradient color per item, in order: the first item gets the
/// start color, the last the end color, and only the first item draws flush
/// with whatever sits above it.
pub fn decorate_group(group: &ListGroup, start: Rgb, end: Rgb) -> DecoratedGroup {
    if group.items.is_empty() {
        return DecoratedGroup { items: Vec::new() };
    }

    let spec = GradientSpec {
        start,
        end,
        steps: group.items.len(),
    };
    // steps >= 1 here, so generation cannot fail; a flat start fill stands in
    // if it ever does.
    let colors = gradient::generate(spec).unwrap_or_else(|_| vec![start; group.items.len()]);

    let items = group
        .items
        .iter()
        .zip(colors)
        .enumerate()
        .map(|(i, (text, color))| DecoratedItem {
            text: text.clone(),
            color,
            spacer_above: i > 0,
        })
        .collect();

    DecoratedGroup { items }
}

/// Decorate every group independently; each spans the full start-to-end
/// range regardless of its length.
pub fn decorate_all(groups: &[ListGroup], start: Rgb, end: Rgb) -> Vec<DecoratedGroup> {
    groups.iter().map(|g| decorate_group(g, start, end)).collect()
}
