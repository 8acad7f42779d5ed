use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use super::board_widget::BoardGeometry;

/// Logical actions decoded from raw terminal events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    HoverLeft,
    HoverRight,
    Hover(Option<usize>),
    DropHovered,
    Drop(usize),
    Undo,
    Restart,
    Quit,
}

pub fn key_action(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Left => Some(Action::HoverLeft),
        KeyCode::Right => Some(Action::HoverRight),
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down => Some(Action::DropHovered),
        KeyCode::Char('u') | KeyCode::Backspace => Some(Action::Undo),
        KeyCode::Char('r') => Some(Action::Restart),
        // Columns are numbered from 1 on screen
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| Action::Drop(d as usize - 1)),
        _ => None,
    }
}

pub fn mouse_action(mouse: MouseEvent, geometry: &BoardGeometry) -> Option<Action> {
    let column = geometry.column_at(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Moved => Some(Action::Hover(column)),
        MouseEventKind::Down(MouseButton::Left) => column.map(Action::Drop),
        _ => None,
    }
}
