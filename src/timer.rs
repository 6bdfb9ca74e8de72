//! 可取消的定时器
//!
//! 由事件循环传入当前时间驱动，不持有线程，便于测试

use std::time::{Duration, Instant};

/// 周期定时器
#[derive(Debug, Clone)]
pub struct Interval {
    period: Duration,
    next_due: Instant,
    cancelled: bool,
}

impl Interval {
    pub fn start(period: Duration, now: Instant) -> Self {
        Self {
            period,
            next_due: now + period,
            cancelled: false,
        }
    }

    /// 返回自上次调用以来经过的周期数（慢帧时一次追赶多个周期）
    pub fn poll(&mut self, now: Instant) -> u32 {
        if self.cancelled || now < self.next_due {
            return 0;
        }
        let overdue = now.duration_since(self.next_due);
        let extra = (overdue.as_nanos() / self.period.as_nanos()) as u32;
        let ticks = extra.saturating_add(1);
        self.next_due += self.period * ticks;
        ticks
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_active(&self) -> bool {
        !self.cancelled
    }

    pub fn next_due(&self) -> Option<Instant> {
        (!self.cancelled).then_some(self.next_due)
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// 最近一次到期的时刻（尚未到期时为启动时刻），取消后仍可读取
    pub fn last_tick(&self) -> Instant {
        self.next_due - self.period
    }
}

/// 一次性延时
#[derive(Debug, Clone)]
pub struct Delay {
    due: Instant,
    state: DelayState,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum DelayState {
    Pending,
    Fired,
    Cancelled,
}

impl Delay {
    pub fn start(delay: Duration, now: Instant) -> Self {
        Self {
            due: now + delay,
            state: DelayState::Pending,
        }
    }

    /// 到期时返回 true，且只返回一次
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.state == DelayState::Pending && now >= self.due {
            self.state = DelayState::Fired;
            return true;
        }
        false
    }

    pub fn cancel(&mut self) {
        if self.state == DelayState::Pending {
            self.state = DelayState::Cancelled;
        }
    }

    pub fn is_active(&self) -> bool {
        self.state == DelayState::Pending
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.is_active().then_some(self.due)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_interval_counts_elapsed_periods() {
        let t0 = Instant::now();
        let mut interval = Interval::start(100 * MS, t0);

        assert_eq!(interval.poll(t0), 0);
        assert_eq!(interval.poll(t0 + 99 * MS), 0);
        assert_eq!(interval.poll(t0 + 100 * MS), 1);
        assert_eq!(interval.poll(t0 + 150 * MS), 0);
        // 慢帧追赶：200..=450 之间有 3 个周期
        assert_eq!(interval.poll(t0 + 450 * MS), 3);
        assert_eq!(interval.next_due(), Some(t0 + 500 * MS));
        // 到期时刻按周期对齐，与轮询时刻无关
        assert_eq!(interval.last_tick(), t0 + 400 * MS);
    }

    #[test]
    fn test_last_tick_before_first_period_is_start() {
        let t0 = Instant::now();
        let mut interval = Interval::start(100 * MS, t0);
        assert_eq!(interval.last_tick(), t0);

        interval.poll(t0 + 130 * MS);
        interval.cancel();
        assert_eq!(interval.last_tick(), t0 + 100 * MS);
    }

    #[test]
    fn test_cancelled_interval_never_fires() {
        let t0 = Instant::now();
        let mut interval = Interval::start(100 * MS, t0);
        interval.cancel();

        assert!(!interval.is_active());
        assert_eq!(interval.poll(t0 + 1000 * MS), 0);
        assert_eq!(interval.next_due(), None);
    }

    #[test]
    fn test_delay_fires_once() {
        let t0 = Instant::now();
        let mut delay = Delay::start(100 * MS, t0);

        assert!(!delay.poll(t0 + 50 * MS));
        assert!(delay.poll(t0 + 100 * MS));
        assert!(!delay.poll(t0 + 200 * MS));
        assert!(!delay.is_active());
    }

    #[test]
    fn test_cancelled_delay_never_fires() {
        let t0 = Instant::now();
        let mut delay = Delay::start(100 * MS, t0);
        delay.cancel();

        assert!(!delay.poll(t0 + 200 * MS));
        assert_eq!(delay.next_due(), None);
    }
}
