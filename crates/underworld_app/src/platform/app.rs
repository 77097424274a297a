use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use site_logging::{set_dispatch_seq, site_debug, site_info, site_warn};
use underworld_core::{update, AppState, AppViewModel, Msg};
use underworld_engine::{EngineEvent, EngineHandle};

use super::effects::{map_event, EffectRunner};
use super::input::{self, Input};
use super::logging;
use super::settings::{self, Settings};
use super::ui::render::render;
use super::ui::surface::{Surface, TerminalSurface};

/// Upper bound on how long a closed stdin waits for sends and timers.
const EOF_GRACE: Duration = Duration::from_secs(10);

pub fn run_app() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("current directory is not accessible")?;
    let (settings, settings_error) = match settings::load_settings(&cwd) {
        Ok(settings) => (settings, None),
        Err(err) => (Settings::default(), Some(err)),
    };
    logging::initialize(settings.log_destination, settings.log_level);
    if let Some(err) = settings_error {
        site_warn!("Using default settings: {}", err);
    }
    site_info!("Underworld starting; recipient={}", settings.mailer.recipient);

    let (engine, engine_events) = EngineHandle::new(settings.mailer);
    let (input_tx, input_rx) = mpsc::channel::<Input>();

    let stdin_tx = input_tx.clone();
    thread::Builder::new()
        .name("stdin".to_string())
        .spawn(move || read_stdin(stdin_tx))
        .context("failed to spawn input thread")?;
    spawn_event_forwarder(engine_events, input_tx)
        .context("failed to spawn engine event thread")?;

    let surface = TerminalSurface::new(io::stdout());
    let mut dispatcher = Dispatcher::new(AppState::new(), EffectRunner::new(engine), surface);
    dispatcher.dispatch(Msg::PageLoaded);
    dispatcher.run(&input_rx, EOF_GRACE);

    site_info!("Underworld stopped after {} messages", dispatcher.seq);
    Ok(())
}

/// Feeds engine completions into the same inbox as user input.
fn spawn_event_forwarder(
    events: mpsc::Receiver<EngineEvent>,
    inbox: mpsc::Sender<Input>,
) -> io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("engine-events".to_string())
        .spawn(move || {
            for event in events {
                if inbox.send(Input::Msg(map_event(event))).is_err() {
                    break;
                }
            }
        })
}

/// Reads commands until EOF. Bad lines are reported and skipped.
fn read_stdin(tx: mpsc::Sender<Input>) {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                site_warn!("stdin read failed: {}", err);
                break;
            }
        };
        match input::parse_line(&line) {
            Ok(Some(input)) => {
                if tx.send(input).is_err() {
                    return;
                }
            }
            Ok(None) => {}
            Err(err) => {
                let names: Vec<&str> = input::command_names().collect();
                let mut stderr = io::stderr();
                let _ = writeln!(stderr, "{err}");
                let _ = writeln!(stderr, "commands: {}", names.join(", "));
            }
        }
    }
    let _ = tx.send(Input::EndOfInput);
}

/// Owns the state and feeds every message through `update`, then executes
/// the effects and renders what changed.
struct Dispatcher<S: Surface> {
    state: AppState,
    runner: EffectRunner,
    surface: S,
    shown: AppViewModel,
    seq: u64,
}

impl<S: Surface> Dispatcher<S> {
    fn new(mut state: AppState, runner: EffectRunner, mut surface: S) -> Self {
        let shown = state.view();
        state.consume_dirty();
        surface.apply_all(render(None, &shown));
        Self {
            state,
            runner,
            surface,
            shown,
            seq: 0,
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        self.seq += 1;
        set_dispatch_seq(self.seq);
        site_debug!("dispatch {:?}", msg);

        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;

        self.runner.run(effects, &mut self.surface);
        if was_dirty {
            let view = self.state.view();
            self.surface.apply_all(render(Some(&self.shown), &view));
            self.shown = view;
        }
    }

    /// No send in flight and no timer armed.
    fn is_idle(&self) -> bool {
        !self.state.is_send_pending() && self.state.pending_timer_count() == 0
    }

    /// Dispatches inbox messages until `Quit`, or until the inbox closes.
    /// After `EndOfInput` only engine events arrive; those are drained until
    /// the state is idle or `grace` runs out.
    fn run(&mut self, inbox: &mpsc::Receiver<Input>, grace: Duration) {
        let mut drain_until: Option<Instant> = None;
        loop {
            let input = match drain_until {
                None => match inbox.recv() {
                    Ok(input) => input,
                    Err(_) => return,
                },
                Some(deadline) => {
                    if self.is_idle() {
                        return;
                    }
                    let left = deadline.saturating_duration_since(Instant::now());
                    match inbox.recv_timeout(left) {
                        Ok(input) => input,
                        Err(_) => {
                            site_warn!(
                                "stopping with work outstanding: send_pending={} timers={}",
                                self.state.is_send_pending(),
                                self.state.pending_timer_count()
                            );
                            return;
                        }
                    }
                }
            };
            match input {
                Input::Msg(msg) => self.dispatch(msg),
                Input::Quit => return,
                Input::EndOfInput => {
                    site_info!("input closed; finishing outstanding work");
                    if drain_until.is_none() {
                        drain_until = Some(Instant::now() + grace);
                    }
                }
            }
        }
    }
}
