//! Terminal blockfall runner (default binary).
//!
//! One loop renders a frame, waits for input until the next gravity step is
//! due, then ticks. Saving, loading and the leaderboard go through the store
//! crate; failures there are shown in the side panel and never end the game.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use rand::rngs::StdRng;
use rand::SeedableRng;

use blockfall::core::{Frame, GameSession, Leaderboard, ScoreRecorder};
use blockfall::input::{map_key, Command};
use blockfall::store::Store;
use blockfall::term::{FrameBuffer, GameView, Hud, TerminalRenderer, Viewport};
use blockfall::types::{GameAction, DEFAULT_TICK_MS};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Seed for the piece sequence, given as a 64-bit integer.
    /// The same seed deals the same pieces. Random when omitted.
    #[arg(short, long)]
    seed: Option<u64>,
    /// Milliseconds between gravity steps.
    #[arg(short, long, default_value_t = DEFAULT_TICK_MS, value_parser = clap::value_parser!(u64).range(1..))]
    tick_ms: u64,
    /// Directory for the save file and the leaderboard.
    /// Defaults to `blockfall` under the platform data directory.
    #[arg(short, long)]
    data_dir: Option<PathBuf>,
    /// Name recorded on the leaderboard.
    #[arg(short, long, default_value_t = default_name())]
    name: String,
    /// Write logs to this file (filtered by `RUST_LOG`, default `info`).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn default_name() -> String {
    std::env::var("USER")
        .ok()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| "player".to_owned())
}

fn main() {
    let args = Args::parse();

    // A panic would otherwise leave the shell in raw mode on the alternate screen.
    std::panic::set_hook(Box::new(|panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stderr(),
            crossterm::style::ResetColor,
            crossterm::cursor::Show,
            crossterm::terminal::LeaveAlternateScreen
        );
        eprint!("{panic_info}\n\n");
    }));

    if let Err(err) = start(args) {
        eprintln!("blockfall: {err:#}");
        std::process::exit(1);
    }
}

fn start(args: Args) -> Result<()> {
    init_logging(args.log_file.as_deref())?;

    let store = args.data_dir.map(Store::new).unwrap_or_default();
    let scores = match store.load_leaderboard() {
        Ok(scores) => scores,
        Err(err) => {
            log::warn!("ignoring unreadable leaderboard: {err}");
            Leaderboard::new()
        }
    };
    let session = match args.seed {
        Some(seed) => GameSession::with_seed(seed),
        None => GameSession::from_entropy(),
    };
    log::info!("starting, data in {}", store.dir().display());

    let mut app = App {
        session,
        store,
        scores,
        name: args.name,
        message: None,
        recorder: ScoreRecorder::new(),
    };

    let mut term = TerminalRenderer::new();
    let result = term
        .enter()
        .and_then(|()| run(&mut term, &mut app, Duration::from_millis(args.tick_ms)));

    // Always try to restore terminal state before reporting anything.
    let restored = term.exit();
    result.context("game loop failed")?;
    restored.context("failed to restore the terminal")?;

    app.record_score();
    Ok(())
}

/// Logs go to a file because the game owns the terminal. No file, no logger.
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

struct App {
    session: GameSession,
    store: Store,
    scores: Leaderboard,
    name: String,
    message: Option<String>,
    recorder: ScoreRecorder,
}

impl App {
    fn handle(&mut self, command: Command) {
        match command {
            Command::Game(action) => {
                if !self.session.apply_action(action) {
                    log::trace!("{} had no effect", action.as_str());
                } else if action == GameAction::Restart {
                    self.recorder.begin(0);
                }
            }
            Command::Save => self.save(),
            Command::Load => self.load(),
            Command::Quit => {}
        }
    }

    fn save(&mut self) {
        let message = match self.store.save_snapshot(&self.session.to_snapshot()) {
            Ok(()) => "game saved".to_owned(),
            Err(err) => {
                log::warn!("save failed: {err}");
                "save failed".to_owned()
            }
        };
        self.message = Some(message);
    }

    fn load(&mut self) {
        let message = match self.store.load_session(StdRng::from_os_rng()) {
            Ok(session) => {
                self.recorder.begin(session.score());
                self.session = session;
                "game loaded".to_owned()
            }
            Err(err) if err.is_not_found() => "no saved game".to_owned(),
            Err(err) => {
                log::warn!("load failed: {err}");
                "load failed".to_owned()
            }
        };
        self.message = Some(message);
    }

    /// React to what the last input or tick did.
    fn after_update(&mut self) {
        if let Some(event) = self.session.take_last_event() {
            if event.lines_cleared > 0 {
                self.message = Some(format!(
                    "+{} for {} line{}",
                    event.score_delta,
                    event.lines_cleared,
                    if event.lines_cleared == 1 { "" } else { "s" }
                ));
            }
        }

        if self.session.game_over() {
            self.record_score();
        }
    }

    /// Offer the current game to the leaderboard and persist it if it changed.
    fn record_score(&mut self) {
        let score = self.session.score();
        if !self.recorder.record(&mut self.scores, &self.name, score) {
            return;
        }
        log::info!("recorded {} points for {}", score, self.name);
        if let Err(err) = self.store.save_leaderboard(&self.scores) {
            log::warn!("could not write leaderboard: {err}");
            self.message = Some("scores not saved".to_owned());
        }
    }
}

fn run(term: &mut TerminalRenderer, app: &mut App, tick: Duration) -> Result<()> {
    let view = GameView::default();
    let mut frame = Frame::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        app.session.frame_into(&mut frame);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let hud = Hud {
            scores: app.scores.top(),
            message: app.message.as_deref(),
        };
        view.render_into(&frame, &hud, Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => match map_key(key) {
                    Some(Command::Quit) => return Ok(()),
                    Some(command) => app.handle(command),
                    None => {}
                },
                Event::Resize(..) => term.force_repaint(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            app.session.tick();
        }

        app.after_update();
    }
}
