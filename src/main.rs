mod error;
mod models;
mod storage;
mod timer;
mod ui;

use std::fs::{self, OpenOptions};
use std::io::{self, Stdout};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::models::LoaderConfig;
use crate::storage::{config_path, load_config, log_path};
use crate::ui::{App, render};

/// 动画帧间隔
const FRAME_INTERVAL: Duration = Duration::from_millis(50);

/// 日志写入文件；打不开文件时宁可不记录，也不要写到终端破坏界面
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file = log_path().and_then(|path| {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).ok()?;
        }
        OpenOptions::new().create(true).append(true).open(path).ok()
    });

    match file {
        Some(file) => tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init(),
        None => tracing_subscriber::registry().with(env_filter).init(),
    }
}

/// 终端会话：创建时进入原始模式/备用屏幕，Drop 时恢复
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}

fn main() -> Result<()> {
    init_tracing();

    let config = match config_path() {
        Some(path) => load_config(&path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => LoaderConfig::default(),
    };

    let mut session = TerminalSession::new().context("setting up terminal")?;

    // 挂载；任何退出路径上 App 的 Drop 都会取消定时器
    let mut app = App::new(config, Instant::now());
    let result = run_app(&mut session.terminal, &mut app);
    app.unmount();

    result.context("running loading screen")
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        let now = Instant::now();
        app.advance(now);
        terminal.draw(|f| render(f, app))?;

        // 等到下一个定时器到期或下一帧动画
        let timeout = app
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
            .map_or(FRAME_INTERVAL, |until| until.min(FRAME_INTERVAL));

        if !event::poll(timeout)? {
            continue;
        }
        let quit = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => ui::handle_key_event(app, key)?,
            Event::Mouse(mouse) => ui::handle_mouse_event(app, mouse)?,
            _ => false,
        };
        if quit {
            break;
        }
    }
    Ok(())
}
