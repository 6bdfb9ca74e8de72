//! App 状态定义 (Model)
//!
//! 组件挂载期间持有的全部状态，卸载时丢弃

use std::time::Instant;

use ratatui::layout::Rect;

use crate::models::{Dots, LoaderConfig, Stage};
use crate::timer::{Delay, Interval};

/// 应用状态
pub struct App {
    pub config: LoaderConfig,
    pub stage: Stage,
    pub dots: Dots,
    pub show_answer: bool,
    pub closing_visible: bool,
    pub footer_visible: bool,
    pub timers: Timers,
    pub mounted_at: Instant,
    pub now: Instant,
    pub stage_changed_at: Instant,
    pub progress_from: u16, // 进度条动画起点 (百分比)
    pub reveal_button: Option<Rect>, // 上一帧渲染的按钮区域，用于鼠标点击检测
    pub mounted: bool,
}

/// 组件持有的定时器
pub struct Timers {
    pub stage: Interval,
    pub dots: Interval,
    pub closing: Option<Delay>, // 进入终态时才启动
    pub footer: Delay,
}

impl Timers {
    fn start(config: &LoaderConfig, now: Instant) -> Self {
        Self {
            stage: Interval::start(config.stage_duration(), now),
            dots: Interval::start(config.dots_duration(), now),
            closing: None,
            footer: Delay::start(config.footer_delay(), now),
        }
    }

    pub fn cancel_all(&mut self) {
        self.stage.cancel();
        self.dots.cancel();
        if let Some(closing) = &mut self.closing {
            closing.cancel();
        }
        self.footer.cancel();
    }

    pub fn any_active(&self) -> bool {
        self.stage.is_active()
            || self.dots.is_active()
            || self.closing.as_ref().is_some_and(Delay::is_active)
            || self.footer.is_active()
    }

    /// 最近的到期时间
    pub fn next_deadline(&self) -> Option<Instant> {
        [
            self.stage.next_due(),
            self.dots.next_due(),
            self.closing.as_ref().and_then(Delay::next_due),
            self.footer.next_due(),
        ]
        .into_iter()
        .flatten()
        .min()
    }
}

impl App {
    /// 挂载组件：状态初始化为 (0, "", false) 并启动定时器
    pub fn new(config: LoaderConfig, now: Instant) -> Self {
        let timers = Timers::start(&config, now);
        tracing::info!(
            stage_ms = config.stage_duration_ms,
            dots_ms = config.dots_duration_ms,
            "Loading screen mounted"
        );
        Self {
            config,
            stage: Stage::INITIAL,
            dots: Dots::default(),
            show_answer: false,
            closing_visible: false,
            footer_visible: false,
            timers,
            mounted_at: now,
            now,
            stage_changed_at: now,
            progress_from: 0,
            reveal_button: None,
            mounted: true,
        }
    }

    pub fn message(&self) -> &str {
        self.config.message(self.stage)
    }

    /// 揭晓按钮的文字
    pub fn reveal_label(&self) -> &'static str {
        if self.show_answer {
            "Hide Answer"
        } else {
            "Reveal Answer"
        }
    }

    /// 笑话区块只在终态显示
    pub fn joke_visible(&self) -> bool {
        self.stage.is_terminal()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.unmount();
    }
}
