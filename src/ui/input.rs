//! 键盘/鼠标事件映射 (Input -> Action)

use std::io;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use super::actions::Action;
use super::state::App;

/// 按键对应的 Action
pub fn get_action(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('r') => Some(Action::ToggleAnswer),
        _ => None,
    }
}

/// 鼠标左键落在揭晓按钮上时触发切换
pub fn get_mouse_action(app: &App, mouse: MouseEvent) -> Option<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    let button = app.reveal_button?;
    button
        .contains(Position::new(mouse.column, mouse.row))
        .then_some(Action::ToggleAnswer)
}

/// 处理按键事件，返回 true 表示退出
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> io::Result<bool> {
    if let Some(action) = get_action(key) {
        Ok(app.dispatch(action))
    } else {
        Ok(false)
    }
}

/// 处理鼠标事件
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) -> io::Result<bool> {
    if let Some(action) = get_mouse_action(app, mouse) {
        Ok(app.dispatch(action))
    } else {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LoaderConfig;
    use ratatui::layout::Rect;
    use std::time::Instant;

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_key_mapping() {
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(get_action(key(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(get_action(key(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(
            get_action(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(get_action(key(KeyCode::Enter)), Some(Action::ToggleAnswer));
        assert_eq!(get_action(key(KeyCode::Char(' '))), Some(Action::ToggleAnswer));
        assert_eq!(get_action(key(KeyCode::Char('r'))), Some(Action::ToggleAnswer));
        assert_eq!(get_action(key(KeyCode::Char('c'))), None);
    }

    #[test]
    fn test_mouse_hits_button_only() {
        let mut app = App::new(LoaderConfig::default(), Instant::now());
        assert_eq!(get_mouse_action(&app, click(5, 5)), None);

        app.reveal_button = Some(Rect::new(10, 10, 17, 1));
        assert_eq!(get_mouse_action(&app, click(12, 10)), Some(Action::ToggleAnswer));
        assert_eq!(get_mouse_action(&app, click(12, 11)), None);

        let release = MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            ..click(12, 10)
        };
        assert_eq!(get_mouse_action(&app, release), None);
    }
}
