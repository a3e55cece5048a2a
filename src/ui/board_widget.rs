use crate::game::{Board, Cell, COLS, ROWS};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Board lines, top row first: a column-number header with the selected
/// column highlighted, the grid on the palette colour, and a marker row.
pub fn board_lines(board: &Board, selected_column: Option<usize>, board_color: Color) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(ROWS + 2);

    let mut header = Vec::with_capacity(COLS);
    for col in 0..COLS {
        let label = format!(" {} ", col + 1);
        if Some(col) == selected_column {
            header.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            header.push(Span::raw(label));
        }
    }
    lines.push(Line::from(header));

    for row in (0..ROWS).rev() {
        let mut spans = Vec::with_capacity(COLS);
        for col in 0..COLS {
            let (symbol, fg) = match board.get(row, col) {
                Cell::Empty => (" \u{25cb} ", Color::Gray),
                Cell::Human => (" \u{25cf} ", Color::Black),
                Cell::Ai => (" \u{25cf} ", Color::White),
            };
            spans.push(Span::styled(symbol, Style::default().fg(fg).bg(board_color)));
        }
        lines.push(Line::from(spans));
    }

    let mut marker = Vec::with_capacity(COLS);
    for col in 0..COLS {
        if Some(col) == selected_column {
            marker.push(Span::styled(" \u{25b2} ", Style::default().fg(Color::Cyan)));
        } else {
            marker.push(Span::raw("   "));
        }
    }
    lines.push(Line::from(marker));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_count() {
        let lines = board_lines(&Board::new(), Some(3), Color::Blue);
        assert_eq!(lines.len(), ROWS + 2);
    }

    #[test]
    fn test_bottom_row_is_last_grid_line() {
        let mut board = Board::new();
        board.drop_piece(0, Cell::Human).unwrap();
        let lines = board_lines(&board, None, Color::Blue);
        let bottom = &lines[ROWS];
        assert_eq!(bottom.spans[0].style.fg, Some(Color::Black));
        let top = &lines[1];
        assert_eq!(top.spans[0].style.fg, Some(Color::Gray));
    }
}
