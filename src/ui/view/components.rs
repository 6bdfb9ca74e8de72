//! 通用 UI 组件
//!
//! 卡片、按钮、浮动表情等

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use super::layouts::centered_line;

/// [组件] 圆角卡片，返回内部区域
pub fn render_card_framework(frame: &mut Frame, area: Rect, border: Color) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// [组件] 居中按钮，返回实际绘制的区域（area 没有高度时为空）
pub fn render_button(frame: &mut Frame, area: Rect, label: &str) -> Rect {
    let text = format!("[ {label} ]");
    let button = centered_line(text.chars().count() as u16, area.y, area).intersection(area);
    if button.is_empty() {
        return button;
    }
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(widget, button);
    button
}

/// [组件] 单个浮动表情
pub fn render_floater(frame: &mut Frame, area: Rect, symbol: &str, emphasized: bool) {
    if area.is_empty() {
        return;
    }
    let style = if emphasized {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::DIM)
    };
    frame.render_widget(Paragraph::new(symbol).style(style), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_button_area_matches_label() {
        let mut terminal = Terminal::new(TestBackend::new(40, 3)).unwrap();
        let mut button = Rect::default();
        terminal
            .draw(|f| button = render_button(f, Rect::new(0, 1, 40, 1), "Reveal Answer"))
            .unwrap();
        assert_eq!(button, Rect::new(11, 1, 17, 1));
    }

    #[test]
    fn test_button_without_room_has_no_hit_area() {
        let mut terminal = Terminal::new(TestBackend::new(40, 3)).unwrap();
        let mut button = Rect::default();
        terminal
            .draw(|f| button = render_button(f, Rect::new(0, 1, 40, 0), "Reveal Answer"))
            .unwrap();
        assert!(button.is_empty());
    }
}
