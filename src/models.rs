use serde::Deserialize;
use std::time::Duration;

use crate::error::ConfigError;

/// 加载阶段 (0..=4)，只增不减，到 4 后停止
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Stage(u8);

impl Stage {
    pub const INITIAL: Stage = Stage(0);
    pub const TERMINAL: Stage = Stage(4);
    pub const COUNT: usize = 5;

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn is_terminal(self) -> bool {
        self == Self::TERMINAL
    }

    /// 下一阶段，终态保持不变
    pub fn advance(self) -> Self {
        if self.is_terminal() {
            self
        } else {
            Stage(self.0 + 1)
        }
    }

    /// 前进 n 步（定时器追赶多个周期时使用）
    pub fn advance_by(self, ticks: u32) -> Self {
        (0..ticks.min(Self::COUNT as u32)).fold(self, |stage, _| stage.advance())
    }

    /// 进度条宽度（百分比）
    pub fn progress_percent(self) -> u16 {
        match self.0 {
            0..=3 => (u16::from(self.0) + 1) * 20,
            _ => 95,
        }
    }

    /// 进度条下方的说明文字
    pub fn caption(self) -> &'static str {
        match self.0 {
            0 | 1 => "Finding camera...",
            2 => "Removing red eyes...",
            3 => "Adding filters...",
            _ => "Stuck at 95% (as always)...",
        }
    }

    pub fn title(self) -> &'static str {
        if self.is_terminal() {
            "Wait, is this taking too long?"
        } else {
            "Photo Gallery Loading"
        }
    }
}

/// 省略号动画，无终态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dots {
    #[default]
    None,
    One,
    Two,
    Three,
}

impl Dots {
    pub fn next(self) -> Self {
        match self {
            Dots::None => Dots::One,
            Dots::One => Dots::Two,
            Dots::Two => Dots::Three,
            Dots::Three => Dots::None,
        }
    }

    pub fn advance_by(self, ticks: u32) -> Self {
        (0..ticks % 4).fold(self, |dots, _| dots.next())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Dots::None => "",
            Dots::One => ".",
            Dots::Two => "..",
            Dots::Three => "...",
        }
    }
}

/// 配置文件结构，所有字段可选
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoaderConfig {
    pub stage_duration_ms: u64,
    pub dots_duration_ms: u64,
    pub closing_delay_ms: u64,
    pub footer_delay_ms: u64,
    pub messages: [String; Stage::COUNT],
    pub joke_question: String,
    pub joke_answer: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            stage_duration_ms: 2500,
            dots_duration_ms: 500,
            closing_delay_ms: 1000,
            footer_delay_ms: 3000,
            messages: [
                "Initializing photo database...".to_string(),
                "Waking up the hamster that powers our server...".to_string(),
                "Asking the photos to smile nicely...".to_string(),
                "Convincing pixels to align properly...".to_string(),
                "Almost there... just convincing the last photo to load...".to_string(),
            ],
            joke_question: "Why was the photo so shy?".to_string(),
            joke_answer:
                "Because it was never developed. Nothing is going to happen. Database Dropped! 😂"
                    .to_string(),
        }
    }
}

impl LoaderConfig {
    pub fn stage_duration(&self) -> Duration {
        Duration::from_millis(self.stage_duration_ms)
    }

    pub fn dots_duration(&self) -> Duration {
        Duration::from_millis(self.dots_duration_ms)
    }

    pub fn closing_delay(&self) -> Duration {
        Duration::from_millis(self.closing_delay_ms)
    }

    pub fn footer_delay(&self) -> Duration {
        Duration::from_millis(self.footer_delay_ms)
    }

    pub fn message(&self, stage: Stage) -> &str {
        &self.messages[stage.index()]
    }

    /// 校验时长：周期不能为 0，省略号周期必须短于阶段周期
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stage_duration_ms == 0 {
            return Err(ConfigError::Invalid(
                "stage_duration_ms must be greater than zero".to_string(),
            ));
        }
        if self.dots_duration_ms == 0 {
            return Err(ConfigError::Invalid(
                "dots_duration_ms must be greater than zero".to_string(),
            ));
        }
        if self.dots_duration_ms >= self.stage_duration_ms {
            return Err(ConfigError::Invalid(format!(
                "dots_duration_ms ({}) must be shorter than stage_duration_ms ({})",
                self.dots_duration_ms, self.stage_duration_ms
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_clamps_at_terminal() {
        let mut stage = Stage::INITIAL;
        for _ in 0..10 {
            let next = stage.advance();
            assert!(next >= stage);
            stage = next;
        }
        assert_eq!(stage, Stage::TERMINAL);
        assert_eq!(Stage::INITIAL.advance_by(u32::MAX), Stage::TERMINAL);
        assert_eq!(Stage::INITIAL.advance_by(2).index(), 2);
    }

    #[test]
    fn test_stage_table() {
        let rows: Vec<(u16, &str)> = (0..5)
            .map(|n| {
                let stage = Stage::INITIAL.advance_by(n);
                (stage.progress_percent(), stage.caption())
            })
            .collect();
        assert_eq!(
            rows,
            vec![
                (20, "Finding camera..."),
                (40, "Finding camera..."),
                (60, "Removing red eyes..."),
                (80, "Adding filters..."),
                (95, "Stuck at 95% (as always)..."),
            ]
        );
        assert_eq!(Stage::INITIAL.title(), "Photo Gallery Loading");
        assert_eq!(Stage::TERMINAL.title(), "Wait, is this taking too long?");
    }

    #[test]
    fn test_dots_cycle() {
        let mut dots = Dots::default();
        let mut seen = Vec::new();
        for _ in 0..8 {
            seen.push(dots.as_str());
            dots = dots.next();
        }
        assert_eq!(seen, vec!["", ".", "..", "...", "", ".", "..", "..."]);
        assert_eq!(Dots::Two.advance_by(5), Dots::Three);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: LoaderConfig = toml::from_str("stage_duration_ms = 100\ndots_duration_ms = 10").unwrap();
        assert_eq!(config.stage_duration(), Duration::from_millis(100));
        assert_eq!(config.message(Stage::INITIAL), "Initializing photo database...");
        assert_eq!(config.joke_question, "Why was the photo so shy?");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_durations() {
        let zero = LoaderConfig {
            stage_duration_ms: 0,
            ..LoaderConfig::default()
        };
        assert!(matches!(zero.validate(), Err(ConfigError::Invalid(_))));

        let slow_dots = LoaderConfig {
            dots_duration_ms: 2500,
            ..LoaderConfig::default()
        };
        assert!(matches!(slow_dots.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_messages_must_have_five_entries() {
        let result: Result<LoaderConfig, _> = toml::from_str("messages = [\"a\", \"b\"]");
        assert!(result.is_err());
    }
}
