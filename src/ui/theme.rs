use crate::projection::bars::BarCategory;
use crate::projection::blocks::BlockCategory;
use crate::projection::tree::NodeStatus;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub keyword: Color,
    pub number: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub function: Color,

    // Element highlights
    pub overwrite: Color,
    pub pivot: Color,
    pub minimum: Color,
    pub key: Color,
    pub swapped: Color,
    pub comparing: Color,
    pub left_scanner: Color,
    pub right_scanner: Color,
    pub sorted: Color,
    pub in_range: Color,
    pub idle: Color,
    pub dimmed: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    keyword: Color::Rgb(137, 180, 250),        // Blue for keywords
    number: Color::Rgb(250, 179, 135),         // Orange for numbers
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for current line
    function: Color::Rgb(249, 226, 175),       // Yellow for procedure names

    overwrite: Color::Rgb(245, 194, 231), // Pink flash
    pivot: Color::Rgb(203, 166, 247),     // Mauve
    minimum: Color::Rgb(235, 160, 172),   // Maroon
    key: Color::Rgb(250, 179, 135),       // Orange
    swapped: Color::Rgb(243, 139, 168),   // Red
    comparing: Color::Rgb(249, 226, 175), // Yellow
    left_scanner: Color::Rgb(148, 226, 213),  // Teal
    right_scanner: Color::Rgb(242, 205, 205), // Flamingo
    sorted: Color::Rgb(166, 227, 161),    // Green
    in_range: Color::Rgb(116, 199, 236),  // Sapphire
    idle: Color::Rgb(88, 91, 112),        // Surface
    dimmed: Color::Rgb(49, 50, 68),
};

pub fn bar_color(category: BarCategory) -> Color {
    let t = &DEFAULT_THEME;
    match category {
        BarCategory::Overwrite => t.overwrite,
        BarCategory::Pivot => t.pivot,
        BarCategory::Minimum => t.minimum,
        BarCategory::Key => t.key,
        BarCategory::Swapped => t.swapped,
        BarCategory::Comparing => t.comparing,
        BarCategory::LeftScan => t.left_scanner,
        BarCategory::RightScan => t.right_scanner,
        BarCategory::Sorted => t.sorted,
        BarCategory::InRange => t.in_range,
        BarCategory::Idle => t.idle,
    }
}

pub fn block_color(category: BlockCategory) -> Color {
    let t = &DEFAULT_THEME;
    match category {
        BlockCategory::Found => t.sorted,
        BlockCategory::Scanning => t.comparing,
        BlockCategory::Midpoint => t.pivot,
        BlockCategory::OutsideWindow => t.dimmed,
        BlockCategory::InsideWindow => t.in_range,
        BlockCategory::NotFound => t.error,
        BlockCategory::Default => t.idle,
    }
}

pub fn node_color(status: NodeStatus) -> Color {
    let t = &DEFAULT_THEME;
    match status {
        NodeStatus::Active => t.fg,
        NodeStatus::Split => t.comment,
        NodeStatus::Pivot => t.pivot,
        NodeStatus::Sorted => t.sorted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scanners_are_told_apart() {
        assert_ne!(bar_color(BarCategory::LeftScan), bar_color(BarCategory::RightScan));
        assert_ne!(bar_color(BarCategory::RightScan), bar_color(BarCategory::Comparing));
        assert_ne!(bar_color(BarCategory::LeftScan), bar_color(BarCategory::InRange));
    }
}
