//! Fruit form - tui-select example
//!
//! The loop follows the usual pattern:
//! 1. Event (keyboard, mouse, focus) -> FormView.handle_event() -> Actions
//! 2. Actions dispatched to EffectStore (with LoggingMiddleware)
//! 3. Reducer updates state and returns effects
//! 4. Effects: LoadOptions spawns a task, Announce logs the submission
//! 5. Re-render
//!
//! # Usage
//!
//! ```sh
//! cargo run -p fruit-form
//!
//! # Faster load, custom label, log to a file
//! cargo run -p fruit-form -- --latency-ms 200 --label "Pick one" --log fruit.log
//! ```

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tui_select::{
    process_raw_event, spawn_event_poller, ActionSummary, EffectStoreWithMiddleware, EventKind,
    LoggingMiddleware, RawEvent,
};

use fruit_form::action::Action;
use fruit_form::components::{Component, FormView, FormViewProps};
use fruit_form::config::{Args, KeyConfig};
use fruit_form::effect::Effect;
use fruit_form::reducer::reducer;
use fruit_form::source::OptionSource;
use fruit_form::state::FormState;

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log {
        if let Err(e) = init_logging(path) {
            eprintln!("Error: could not open log file {}: {}", path.display(), e);
            std::process::exit(1);
        }
    }

    let keys = match KeyConfig::load(args.keys.as_deref()) {
        Ok(keys) => keys,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, args, keys).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    result
}

/// Send `tracing` output to a file; the terminal belongs to the UI
fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    args: Args,
    keys: KeyConfig,
) -> io::Result<()> {
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

    let mut store =
        EffectStoreWithMiddleware::new(FormState::default(), reducer, LoggingMiddleware::new());
    let source = OptionSource::new(args.options, Duration::from_millis(args.latency_ms));
    let mut view = FormView::new(args.label, keys);

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<RawEvent>();
    let cancel_token = CancellationToken::new();
    let _handle = spawn_event_poller(
        event_tx,
        Duration::from_millis(10),
        Duration::from_millis(16),
        cancel_token.clone(),
    );

    // Load on start
    let _ = action_tx.send(Action::OptionsFetch);

    let mut should_render = true;

    loop {
        if should_render {
            terminal.draw(|frame| {
                let area = frame.area();
                let props = FormViewProps {
                    state: store.state(),
                };
                view.render(frame, area, props);
            })?;
            should_render = false;
        }

        tokio::select! {
            Some(raw_event) = event_rx.recv() => {
                let event = process_raw_event(raw_event);

                if matches!(event, EventKind::Key(_)) && event.is_global() {
                    let _ = action_tx.send(Action::Quit);
                    continue;
                }

                let props = FormViewProps {
                    state: store.state(),
                };
                for action in view.handle_event(&event, props) {
                    let _ = action_tx.send(action);
                }
                // The dropdown keeps its own state; redraw after any input
                should_render = true;
            }

            Some(action) = action_rx.recv() => {
                if matches!(action, Action::Quit) {
                    break;
                }
                tracing::trace!(action = %action.summary(), "dispatch");
                let result = store.dispatch(action);
                should_render |= result.changed;
                for effect in result.effects {
                    handle_effect(effect, &source, &action_tx);
                }
            }
        }
    }

    cancel_token.cancel();
    info!(dispatched = store.middleware().dispatched(), "shutting down");
    Ok(())
}

fn handle_effect(effect: Effect, source: &OptionSource, action_tx: &mpsc::UnboundedSender<Action>) {
    match effect {
        Effect::LoadOptions => {
            let source = source.clone();
            let tx = action_tx.clone();
            tokio::spawn(async move {
                let action = match source.load().await {
                    Ok(options) => Action::OptionsDidLoad(options),
                    Err(e) => {
                        warn!(
                            error = %e,
                            path = %source.path().display(),
                            "option source failed"
                        );
                        Action::OptionsDidError(e.to_string())
                    }
                };
                let _ = tx.send(action);
            });
        }
        Effect::Announce(message) => {
            info!(%message, "form submitted");
        }
    }
}
