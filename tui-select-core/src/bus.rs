//! Terminal event polling

use crate::event::EventKind;
use crossterm::event;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Raw event from crossterm before processing
#[derive(Debug)]
pub enum RawEvent {
    Key(crossterm::event::KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Resize(u16, u16),
    FocusGained,
    FocusLost,
}

/// Spawn the event polling task with cancellation support
///
/// This spawns an async task that polls for crossterm events and sends them
/// through the provided channel. The task can be cancelled using the token.
///
/// # Arguments
/// * `tx` - Channel to send raw events
/// * `poll_timeout` - Timeout for each poll operation
/// * `loop_sleep` - Sleep duration between poll cycles
/// * `cancel_token` - Token to cancel the polling task
pub fn spawn_event_poller(
    tx: mpsc::UnboundedSender<RawEvent>,
    poll_timeout: Duration,
    loop_sleep: Duration,
    cancel_token: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        const MAX_EVENTS_PER_BATCH: usize = 20;

        loop {
            tokio::select! {
                _ = cancel_token.cancelled() => {
                    info!("Event poller cancelled, draining buffer");
                    while event::poll(Duration::ZERO).unwrap_or(false) {
                        let _ = event::read();
                    }
                    break;
                }
                _ = tokio::time::sleep(loop_sleep) => {
                    let mut events_processed = 0;
                    while events_processed < MAX_EVENTS_PER_BATCH
                        && event::poll(poll_timeout).unwrap_or(false)
                    {
                        events_processed += 1;
                        if let Ok(evt) = event::read() {
                            if let Some(raw) = into_raw(evt) {
                                if tx.send(raw).is_err() {
                                    debug!("Event channel closed, stopping poller");
                                    return;
                                }
                            }
                        }
                    }
                }
            }
        }
    })
}

fn into_raw(evt: event::Event) -> Option<RawEvent> {
    match evt {
        event::Event::Key(key) if key.kind == event::KeyEventKind::Press => {
            Some(RawEvent::Key(key))
        }
        event::Event::Mouse(mouse) => Some(RawEvent::Mouse(mouse)),
        event::Event::Resize(w, h) => Some(RawEvent::Resize(w, h)),
        event::Event::FocusGained => Some(RawEvent::FocusGained),
        event::Event::FocusLost => Some(RawEvent::FocusLost),
        _ => None,
    }
}

/// Process a raw event into an EventKind
pub fn process_raw_event(raw: RawEvent) -> EventKind {
    match raw {
        RawEvent::Key(key) => EventKind::Key(key),
        RawEvent::Mouse(mouse) => EventKind::Mouse(mouse),
        RawEvent::Resize(w, h) => EventKind::Resize(w, h),
        RawEvent::FocusGained => EventKind::FocusGained,
        RawEvent::FocusLost => EventKind::FocusLost,
    }
}
