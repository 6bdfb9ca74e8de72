//! 状态更新 (Update/Dispatch)
//!
//! 定时器回调 (advance) 与用户操作 (dispatch) 是唯一修改状态的入口

use std::time::{Duration, Instant};

use super::actions::Action;
use super::motion;
use super::state::App;
use crate::timer::Delay;

/// 进度条宽度过渡时长
pub const PROGRESS_TRANSITION: Duration = Duration::from_millis(1500);

impl App {
    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        if !self.is_mounted() {
            return matches!(action, Action::Quit);
        }
        match action {
            Action::Quit => return true,
            Action::ToggleAnswer => self.toggle_answer(),
        }
        false
    }

    /// 推进所有定时器到 `now`
    pub fn advance(&mut self, now: Instant) {
        if !self.is_mounted() {
            return;
        }
        self.now = now;

        let dots_ticks = self.timers.dots.poll(now);
        self.dots = self.dots.advance_by(dots_ticks);

        let stage_ticks = self.timers.stage.poll(now);
        if stage_ticks > 0 {
            self.advance_stage(stage_ticks);
        }

        if self.timers.closing.as_mut().is_some_and(|delay| delay.poll(now)) {
            self.closing_visible = true;
        }
        if self.timers.footer.poll(now) {
            self.footer_visible = true;
        }
    }

    fn advance_stage(&mut self, ticks: u32) {
        let next = self.stage.advance_by(ticks);
        if next == self.stage {
            return;
        }

        // 阶段实际切换的时刻：追赶多个周期时，最后一次生效的 tick 之后还可能有空转的 tick
        let steps = (next.index() - self.stage.index()) as u32;
        let interval = &self.timers.stage;
        let last_tick = interval.last_tick();
        let changed_at = last_tick
            .checked_sub(interval.period() * (ticks - steps))
            .unwrap_or(last_tick);

        self.progress_from = self.progress_percent_at(changed_at);
        self.stage = next;
        self.stage_changed_at = changed_at;
        tracing::debug!(stage = next.index(), "Stage advanced");

        if next.is_terminal() {
            // 终态后阶段定时器可继续触发而无影响，这里直接停掉
            self.timers.stage.cancel();
            self.timers.closing = Some(Delay::start(self.config.closing_delay(), changed_at));
            tracing::info!("Reached terminal stage, joke revealed");
        }
    }

    /// 切换答案显示，按钮未渲染前忽略
    pub fn toggle_answer(&mut self) {
        if !self.joke_visible() {
            return;
        }
        self.show_answer = !self.show_answer;
        tracing::debug!(show_answer = self.show_answer, "Answer toggled");
    }

    /// 卸载：取消所有定时器，可重复调用
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.timers.cancel_all();
        self.mounted = false;
        self.reveal_button = None;
        debug_assert!(!self.timers.any_active());
        tracing::info!(stage = self.stage.index(), "Loading screen unmounted");
    }

    /// 事件循环下次需要唤醒的时间
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// 当前进度条宽度（百分比），在 PROGRESS_TRANSITION 内从旧值缓动到新值
    pub fn progress_percent(&self) -> u16 {
        self.progress_percent_at(self.now)
    }

    fn progress_percent_at(&self, at: Instant) -> u16 {
        let target = self.stage.progress_percent();
        let elapsed = at.saturating_duration_since(self.stage_changed_at);
        let t = motion::progress(elapsed, PROGRESS_TRANSITION);
        let from = f64::from(self.progress_from);
        let value = from + (f64::from(target) - from) * motion::ease_out(t);
        value.round() as u16
    }

    pub fn elapsed(&self) -> Duration {
        self.now.saturating_duration_since(self.mounted_at)
    }

    pub fn since_stage_change(&self) -> Duration {
        self.now.saturating_duration_since(self.stage_changed_at)
    }
}
