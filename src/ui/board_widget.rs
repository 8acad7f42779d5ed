use std::str::FromStr;

use crate::game::{Phase, PlayerId, SlotPos, Snapshot};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const CELL_WIDTH: u16 = 3;
/// Left border ("  ║") before the first cell.
const LEFT_PAD: u16 = 3;
/// Arrow line and top border above the first row.
const TOP_PAD: u16 = 2;

/// Where the board landed on screen, for mapping mouse positions back to
/// columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    pub area: Rect,
    pub cells_x: u16,
    pub columns: usize,
}

impl BoardGeometry {
    pub fn new(area: Rect, columns: usize) -> Self {
        BoardGeometry {
            area,
            cells_x: area.x + LEFT_PAD,
            columns,
        }
    }

    /// Column under terminal cell `(x, y)`, if any.
    pub fn column_at(&self, x: u16, y: u16) -> Option<usize> {
        if y < self.area.y || y >= self.area.y + self.area.height || x < self.cells_x {
            return None;
        }
        let col = usize::from((x - self.cells_x) / CELL_WIDTH);
        (col < self.columns).then_some(col)
    }
}

/// Parse a player color token, falling back to white for unknown names.
pub fn player_color(token: &str) -> Color {
    Color::from_str(token).unwrap_or(Color::White)
}

fn color_of(snapshot: &Snapshot, id: PlayerId) -> Color {
    snapshot
        .player(id)
        .map_or(Color::White, |p| player_color(&p.color))
}

/// Size of the rendered board in terminal cells, saturating at `u16::MAX`.
pub fn board_size(columns: usize, rows: usize) -> (u16, u16) {
    let columns = u16::try_from(columns).unwrap_or(u16::MAX);
    let rows = u16::try_from(rows).unwrap_or(u16::MAX);
    let width = CELL_WIDTH
        .saturating_mul(columns)
        .saturating_add(LEFT_PAD + 2);
    let height = rows.saturating_add(TOP_PAD + 2);
    (width, height)
}

/// Render the board centered in `area`: hover arrow, grid, column numbers.
pub fn render_board(frame: &mut Frame, snapshot: &Snapshot, area: Rect) -> BoardGeometry {
    let (width, height) = board_size(snapshot.columns, snapshot.rows);
    let width = width.min(area.width);
    let height = height.min(area.height);
    let board_area = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let current_color = snapshot
        .current_player
        .map_or(Color::White, |id| color_of(snapshot, id));
    let inner = "═".repeat(snapshot.columns * CELL_WIDTH as usize + 1);
    let mut lines = Vec::with_capacity(snapshot.rows + 4);

    let mut arrow_line = vec![Span::raw("   ")];
    for col in 0..snapshot.columns {
        if snapshot.phase == Phase::Playing && snapshot.hovered_column == Some(col) {
            arrow_line.push(Span::styled(
                " ▼ ",
                Style::default()
                    .fg(current_color)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            arrow_line.push(Span::raw("   "));
        }
    }
    lines.push(Line::from(arrow_line));

    lines.push(Line::from(format!("  ╔{inner}╗")));

    for row in 0..snapshot.rows {
        let mut spans = vec![Span::raw("  ║")];
        for col in 0..snapshot.columns {
            let pos = SlotPos::new(row, col);
            let span = match snapshot.occupant(row, col) {
                Some(id) if snapshot.is_winning_slot(pos) => Span::styled(
                    " ◆ ",
                    Style::default()
                        .fg(color_of(snapshot, id))
                        .add_modifier(Modifier::BOLD),
                ),
                Some(id) => Span::styled(" ● ", Style::default().fg(color_of(snapshot, id))),
                None if snapshot.hint == Some(pos) => Span::styled(
                    " ○ ",
                    Style::default().fg(current_color).add_modifier(Modifier::DIM),
                ),
                None => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
            };
            spans.push(span);
        }
        spans.push(Span::raw(" ║"));
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(format!("  ╚{inner}╝")));

    let mut numbers = vec![Span::raw("   ")];
    for col in 0..snapshot.columns {
        let label = format!("{:^3}", col + 1);
        if snapshot.hovered_column == Some(col) {
            numbers.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            numbers.push(Span::raw(label));
        }
    }
    lines.push(Line::from(numbers));

    frame.render_widget(Paragraph::new(lines), board_area);
    BoardGeometry::new(board_area, snapshot.columns)
}
