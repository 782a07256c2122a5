//! The MultiBPO signup funnel on the terminal: registration, email
//! verification, subscription checkout, and the legal text, with WhatsApp
//! deep links arriving as subcommands.

/// The "functional core" to the main module's "imperative shell"
mod app;

/// Configuration and argument parsing
mod config;

/// Form-field helpers
mod form_fields;

use app::{App, Effect, EffectContext, ScreenKey};
use clap::Parser;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use multibpo_core::session::FileStore;
use ratatui::DefaultTerminal;
use std::{io, process::ExitCode, sync::Arc};
use tokio::{
    sync::mpsc::{unbounded_channel, UnboundedSender},
    task::JoinHandle,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> io::Result<ExitCode> {
    let config = config::Config::parse();

    // The terminal belongs to the UI, so logs go to a file in the data dir.
    let appender = tracing_appender::rolling::never(config.data_dir().join("logs"), "multibpo.log");
    let (writer, _guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(writer)
        .with_ansi(false)
        .init();

    let context = Arc::new(EffectContext::new(Arc::new(FileStore::new(
        config.data_dir().join("session.json"),
    ))));

    let mut terminal = ratatui::init();
    terminal.clear()?;
    let res = run(terminal, context, &config).await;
    ratatui::restore();
    res
}

/// Manage the lifecycle of the app
async fn run(
    mut terminal: DefaultTerminal,
    context: Arc<EffectContext>,
    config: &config::Config,
) -> io::Result<ExitCode> {
    let mut app = App::new(config);

    // Side effects run on spawned tasks and their results come back as
    // actions on this channel. Each task remembers which screen started it,
    // so navigating away can abort requests whose screen is gone.
    let (effect_tx, mut effect_rx) = unbounded_channel();
    let mut outstanding_effects: Vec<(Option<ScreenKey>, JoinHandle<()>)> = Vec::with_capacity(1);

    // Initialize the app, spawn tasks for its initial effects, and render the
    // first frame.
    for effect in app.init() {
        outstanding_effects.push(spawn_effect_task(
            effect_tx.clone(),
            Arc::clone(&context),
            &app,
            effect,
        ));
    }
    terminal.draw(|frame| app.render(frame))?;

    let mut event_stream = EventStream::new();

    // Start our event loop!
    loop {
        // First thing we do is wait for an event. This can be either external
        // input or the async result of an effect. This is an `Option<_>`
        // because we don't necessarily need to pay attention to every single
        // piece of external input.
        let next_action_opt = tokio::select! {
            event_opt = event_stream.next() => {
                match event_opt {
                    Some(Ok(Event::Key(key_event))) => {
                        Some(app::Action::Key(key_event))
                    }
                    Some(Err(err)) => {
                        Some(app::Action::Problem(err.to_string()))
                    }
                    _ => None,
                }
            },

            effect_opt = effect_rx.recv() => {
                effect_opt
            }
        };

        if let Some(action) = next_action_opt {
            let before = app.screen_key();
            let effects = app.handle(action);
            let after = app.screen_key();

            // The screen changed: requests the old screen was waiting on no
            // longer have anywhere to land, so their tasks get aborted.
            if before != after {
                for (key, handle) in &outstanding_effects {
                    if key.is_some_and(|key| key != after) {
                        handle.abort();
                    }
                }
            }

            for effect in effects {
                outstanding_effects.push(spawn_effect_task(
                    effect_tx.clone(),
                    Arc::clone(&context),
                    &app,
                    effect,
                ));
            }
        }

        // Now that we handled the event, we re-render to display any changes
        // the app cares about.
        terminal.draw(|frame| app.render(frame))?;

        // Drop completed (or aborted) tasks. This list never gets long, so a
        // full scan on every pass is fine.
        outstanding_effects.retain(|(_, handle)| !handle.is_finished());

        // Finally, if the app indicates that it should exit, we wait for the
        // stragglers (e.g. the session write) before leaving with the app's
        // exit code.
        if let Some(code) = app.should_exit() {
            for (_, effect) in outstanding_effects.drain(..) {
                // Aborted tasks report a join error here; that's fine on the
                // way out.
                let _ = effect.await;
            }

            return Ok(code);
        }
    }
}

/// Spawn a task to run an effect and send the next action to the app. The
/// returned key is `Some` for view-bound effects, which are aborted when the
/// user navigates away from the screen that started them.
fn spawn_effect_task(
    effect_tx: UnboundedSender<app::Action>,
    context: Arc<EffectContext>,
    app: &App,
    effect: Effect,
) -> (Option<ScreenKey>, JoinHandle<()>) {
    let key = effect.is_view_bound().then(|| app.screen_key());

    let handle = tokio::spawn(async move {
        if let Some(next_action) = effect.run(&context).await {
            // If the channel is closed we're shutting down, and dropping the
            // action is OK.
            let _ = effect_tx.send(next_action);
        }
    });

    (key, handle)
}
