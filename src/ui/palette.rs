use ratatui::style::Color;

use crate::config::PALETTE_SIZE;

/// Sixteen shades of yellow for the board, indexed 1..=16.
const SHADES: [(u8, u8, u8); PALETTE_SIZE as usize] = [
    (230, 219, 172),
    (238, 220, 154),
    (249, 224, 118),
    (201, 187, 142),
    (214, 184, 90),
    (223, 201, 138),
    (250, 226, 156),
    (200, 169, 81),
    (243, 234, 175),
    (216, 184, 99),
    (227, 183, 120),
    (231, 194, 125),
    (220, 215, 160),
    (227, 197, 101),
    (237, 232, 186),
    (251, 231, 144),
];

/// Board colour for a 1-based palette index. Out-of-range indices fall back
/// to the first shade.
pub fn board_color(index: u8) -> Color {
    let (r, g, b) = match index {
        1..=PALETTE_SIZE => SHADES[usize::from(index - 1)],
        _ => SHADES[0],
    };
    Color::Rgb(r, g, b)
}

/// The palette index after `index`, wrapping from 16 back to 1.
pub fn next_color(index: u8) -> u8 {
    if index >= PALETTE_SIZE {
        1
    } else {
        index + 1
    }
}
