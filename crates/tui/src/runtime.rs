//! Terminal lifecycle and the unified event loop.
//!
//! A dedicated input thread blocks on `crossterm::event::read()` and forwards
//! events over a channel, keeping terminal input reliable across emulators.
//! Background work (the content fetch and contact POSTs) runs as spawned
//! tasks that deliver [`AppEvent`]s over a second channel. Quitting while a
//! request is outstanding just drops the receiver; results are discarded.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use folio_api::PortfolioClient;
use folio_content::cache::ContentCache;
use ratatui::{Terminal, prelude::*};
use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};
use tracing::warn;

use crate::app::{Action, App, AppEvent};
use crate::ui;

/// Spawn the blocking input reader thread.
///
/// `read()` stays on one OS thread; the loop ends once the receiving side of
/// the channel is gone.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(100);
    std::thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event) => {
                    if sender.blocking_send(event).is_err() {
                        break;
                    }
                }
                Err(error) => {
                    warn!(error = %error, "failed to read terminal event");
                    break;
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn spawn_fetch(cache: Arc<ContentCache>, events: mpsc::Sender<AppEvent>, force: bool) {
    tokio::spawn(async move {
        let result = if force { cache.refresh().await } else { cache.get().await };
        let event = match result {
            Ok(content) => AppEvent::ContentLoaded(content),
            Err(error) => AppEvent::ContentFailed(error),
        };
        let _ = events.send(event).await;
    });
}

/// Run the TUI until the user quits.
pub async fn run_app(client: PortfolioClient) -> Result<()> {
    let cache = Arc::new(ContentCache::with_default_window(Arc::new(client.clone())));
    let mut terminal = setup_terminal()?;
    let mut app = App::new();

    let (event_tx, mut event_rx) = mpsc::channel::<AppEvent>(16);
    let mut input_rx = spawn_input_thread();
    spawn_fetch(Arc::clone(&cache), event_tx.clone(), false);

    let mut ticker = time::interval(Duration::from_millis(250));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let result = loop {
        if let Err(error) = terminal.draw(|frame| ui::draw(frame, &mut app)) {
            break Err(error.into());
        }

        tokio::select! {
            Some(input) = input_rx.recv() => match input {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    match app.handle_key(key) {
                        Some(Action::Submit(payload)) => {
                            let client = client.clone();
                            let events = event_tx.clone();
                            tokio::spawn(async move {
                                let outcome = client.post_contact_message(&payload).await;
                                let _ = events.send(AppEvent::SubmitFinished(outcome)).await;
                            });
                        }
                        Some(Action::Refresh) => {
                            spawn_fetch(Arc::clone(&cache), event_tx.clone(), true);
                        }
                        None => {}
                    }
                }
                // Resizes are handled by redrawing on the next loop pass.
                _ => {}
            },
            Some(event) = event_rx.recv() => app.on_event(event),
            _ = ticker.tick() => app.tick(),
        }

        if app.should_quit {
            break Ok(());
        }
    };

    cleanup_terminal(&mut terminal)?;
    result
}
