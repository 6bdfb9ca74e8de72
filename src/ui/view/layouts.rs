//! 布局辅助函数

use ratatui::layout::Rect;

/// 在 area 中居中放置一个不超过 width x height 的矩形
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// 在 area 内一行居中放置宽度为 width 的矩形
pub fn centered_line(width: u16, y: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    Rect::new(area.x + (area.width - width) / 2, y, width, 1)
}

/// 以 (x, y) 为左上角的单行矩形，裁剪到 area 之内
pub fn anchored(x: u16, y: u16, width: u16, area: Rect) -> Rect {
    Rect::new(x, y, width, 1).intersection(area)
}
