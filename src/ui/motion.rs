//! 动画曲线
//!
//! 全部是挂载后经过时间的纯函数

use std::time::Duration;

pub const CAMERA_SPIN: Duration = Duration::from_secs(20);
pub const THINKER_BOB: Duration = Duration::from_secs(6);
pub const SLEEPER_PULSE: Duration = Duration::from_secs(4);
pub const BOUNCE: Duration = Duration::from_millis(1500);
pub const BOUNCE_STAGGER: Duration = Duration::from_millis(200);
pub const HOURGLASS_SPIN: Duration = Duration::from_secs(2);
pub const MESSAGE_FADE: Duration = Duration::from_millis(500);

/// 相机"旋转"帧
pub const CAMERA_FRAMES: [&str; 4] = ["📸", "📷", "📸", "📷"];
pub const HOURGLASS_FRAMES: [&str; 2] = ["⏳", "⌛"];

/// 周期内的相位 [0, 1)
pub fn phase(elapsed: Duration, period: Duration) -> f64 {
    if period.is_zero() {
        return 0.0;
    }
    let period_ns = period.as_nanos();
    (elapsed.as_nanos() % period_ns) as f64 / period_ns as f64
}

/// 过渡进度 [0, 1]
pub fn progress(elapsed: Duration, total: Duration) -> f64 {
    if total.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / total.as_secs_f64()).clamp(0.0, 1.0)
}

/// 三次缓出
pub fn ease_out(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

pub fn frame<'a>(elapsed: Duration, period: Duration, frames: &[&'a str]) -> &'a str {
    if frames.is_empty() {
        return "";
    }
    let idx = (phase(elapsed, period) * frames.len() as f64) as usize;
    frames[idx.min(frames.len() - 1)]
}

/// 上下浮动：0 -> amplitude -> 0 的三角波
pub fn bob_offset(elapsed: Duration, period: Duration, amplitude: u16) -> u16 {
    let p = phase(elapsed, period);
    let tri = if p < 0.5 { p * 2.0 } else { (1.0 - p) * 2.0 };
    (tri * f64::from(amplitude)).round() as u16
}

/// 脉冲：周期中段放大
pub fn pulse_on(elapsed: Duration, period: Duration) -> bool {
    let p = phase(elapsed, period);
    (0.25..0.75).contains(&p)
}

/// 第 index 个跳动圆点是否处于放大状态
pub fn bounce_up(elapsed: Duration, index: u32) -> bool {
    let delay = BOUNCE_STAGGER * index;
    match elapsed.checked_sub(delay) {
        Some(local) => pulse_on(local, BOUNCE),
        None => false,
    }
}
