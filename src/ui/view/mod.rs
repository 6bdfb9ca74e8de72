//! 视图层模块
//!
//! 纯函数：由 (stage, dots, show_answer, 经过时间) 映射为画面

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};

use super::motion;
use super::state::App;
use components::{render_button, render_card_framework, render_floater};
use layouts::{anchored, centered_rect};

const CARD_WIDTH: u16 = 64;
const CARD_HEIGHT: u16 = 24;
const VERSION_TAG: &str = "v1.0.0 • Not actually loading anything";

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let card = centered_rect(CARD_WIDTH, CARD_HEIGHT, area);

    frame.render_widget(Block::default().style(Style::default().bg(Color::Black)), area);
    render_background(frame, app, area, card);

    let inner = render_card_framework(frame, card, Color::Magenta);
    render_card(frame, app, inner);

    render_footer(frame, app, area);
}

fn render_background(frame: &mut Frame, app: &App, area: Rect, card: Rect) {
    let elapsed = app.elapsed();

    let camera = motion::frame(elapsed, motion::CAMERA_SPIN, &motion::CAMERA_FRAMES);
    render_floater(frame, anchored(area.x + 4, area.y + 2, 2, area), camera, true);

    let bob = motion::bob_offset(elapsed, motion::THINKER_BOB, 2);
    let thinker_y = (area.y + area.height).saturating_sub(3 + bob);
    let thinker_x = (area.x + area.width).saturating_sub(6);
    render_floater(frame, anchored(thinker_x, thinker_y, 2, area), "🤔", true);

    if let Some(sleeper_x) = sleeper_column(area, card) {
        let sleeper_y = area.y + area.height / 3;
        let pulsing = motion::pulse_on(elapsed, motion::SLEEPER_PULSE);
        render_floater(frame, anchored(sleeper_x, sleeper_y, 2, area), "😴", pulsing);
    }
}

/// 😴 的列：优先卡片右侧留白，其次左侧，都放不下时不显示（卡片会盖住它）
fn sleeper_column(area: Rect, card: Rect) -> Option<u16> {
    let x = (area.x + area.width * 3 / 4).max(card.right() + 2);
    if x + 2 <= area.right() {
        return Some(x);
    }
    (card.x >= area.x + 4).then(|| card.x - 3)
}

fn render_card(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题
            Constraint::Length(1),
            Constraint::Length(2), // 阶段文案
            Constraint::Length(1), // 跳动圆点
            Constraint::Length(1),
            Constraint::Length(1), // 进度条
            Constraint::Length(1), // 进度说明
            Constraint::Length(1),
            Constraint::Length(6), // 笑话
            Constraint::Length(2), // 结束语
            Constraint::Min(0),
        ])
        .split(area);

    render_title(frame, app, chunks[0]);
    render_message(frame, app, chunks[2]);
    render_bouncing_dots(frame, app, chunks[3]);
    render_progress(frame, app, chunks[5], chunks[6]);

    if app.joke_visible() {
        render_joke(frame, app, chunks[8]);
    } else {
        app.reveal_button = None;
    }
    if app.closing_visible {
        render_closing(frame, app, chunks[9]);
    }
}

fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let title = Paragraph::new(app.stage.title())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(title, area);
}

fn render_message(frame: &mut Frame, app: &App, area: Rect) {
    // 阶段切换后的 0.5s 内以暗色显示，模拟淡入
    let style = if app.since_stage_change() < motion::MESSAGE_FADE {
        Style::default().fg(Color::Gray).add_modifier(Modifier::DIM)
    } else {
        Style::default().fg(Color::Gray)
    };
    let message = Paragraph::new(app.message())
        .alignment(Alignment::Center)
        .style(style)
        .wrap(Wrap { trim: true });
    frame.render_widget(message, area);
}

fn render_bouncing_dots(frame: &mut Frame, app: &App, area: Rect) {
    let elapsed = app.elapsed();
    let spans: Vec<Span> = (0..3u32)
        .map(|i| {
            if motion::bounce_up(elapsed, i) {
                Span::styled("● ", Style::default().fg(Color::Magenta))
            } else {
                Span::styled("• ", Style::default().fg(Color::Magenta).add_modifier(Modifier::DIM))
            }
        })
        .collect();
    let dots = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(dots, area);
}

fn render_progress(frame: &mut Frame, app: &App, bar: Rect, caption: Rect) {
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Magenta).bg(Color::DarkGray))
        .percent(app.progress_percent().min(100))
        .label("")
        .use_unicode(true);
    frame.render_widget(gauge, bar);

    let caption_widget = Paragraph::new(app.stage.caption())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(caption_widget, caption);
}

fn render_joke(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let question = Paragraph::new(app.config.joke_question.as_str())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(question, rows[0]);

    let button = render_button(frame, rows[1], app.reveal_label());
    app.reveal_button = (!button.is_empty()).then_some(button);

    if app.show_answer {
        let answer = Paragraph::new(app.config.joke_answer.as_str())
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(answer, rows[2]);
    }
}

fn render_closing(frame: &mut Frame, app: &App, area: Rect) {
    let hourglass = motion::frame(app.elapsed(), motion::HOURGLASS_SPIN, &motion::HOURGLASS_FRAMES);
    let lines = vec![
        Line::from("Just kidding! Your photos will load any moment now..."),
        Line::from(hourglass),
    ];
    let closing = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(closing, area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let y = (area.y + area.height).saturating_sub(1);
    let style = Style::default().fg(Color::DarkGray);

    let loading = format!("Loading{}", app.dots.as_str());
    frame.render_widget(
        Paragraph::new(loading).style(style),
        anchored(area.x + 1, y, 10, area),
    );

    if app.footer_visible {
        let width = VERSION_TAG.chars().count() as u16;
        let x = (area.x + area.width).saturating_sub(width + 1);
        frame.render_widget(
            Paragraph::new(VERSION_TAG).style(style),
            anchored(x, y, width, area),
        );
    }
}
