//! src/main.rs
//! Terminal prompt browser: loads the catalog, then runs the event loop

use std::{
    io::{self, Stdout},
    panic::PanicHookInfo,
    sync::Arc,
    time::Duration,
};

use anyhow::{Context, Result};
use crossterm::{
    event::{Event as TerminalEvent, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use tokio::{
    sync::mpsc::{self, UnboundedReceiver},
    task::JoinHandle,
};
use tracing::{debug, error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;

use promptdeck_core::{
    AppState, Logger,
    config::Config,
    controller::{ActionDispatcher, DispatchResult, actions::Action},
    operators::catalog_loader::{CatalogSource, spawn_catalog_load},
    view::{theme::Palette, ui::UIRenderer},
};

type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

const TICK_INTERVAL: Duration = Duration::from_millis(250);

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> Result<()> {
    let (config, config_error) = match Config::load().await {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    let _guard: WorkerGuard = Logger::init_tracing(config.logging.clone())
        .await
        .context("Failed to initialize logging")?;

    if let Some(e) = config_error {
        info!("Failed to load config, using defaults: {}", e);
    }

    setup_panic_handler();

    let app = App::new(config).context("Failed to initialize application")?;
    app.run().await.context("Application runtime error")?;

    info!("Application exited cleanly");
    Ok(())
}

struct App {
    terminal: AppTerminal,
    state: AppState,
    dispatcher: ActionDispatcher,
    ui_renderer: UIRenderer,
    action_rx: UnboundedReceiver<Action>,
    load_handle: JoinHandle<()>,
}

impl App {
    fn new(mut config: Config) -> Result<Self> {
        info!("Starting PromptDeck");

        // `promptdeck [SOURCE]` overrides the configured catalog location
        if let Some(source) = std::env::args().nth(1) {
            config.catalog_source = CatalogSource::from(source);
        }

        let terminal = setup_terminal().context("Failed to initialize terminal")?;

        let palette = Palette::for_theme(config.theme);
        let (action_tx, action_rx) = mpsc::unbounded_channel::<Action>();

        let load_handle = spawn_catalog_load(config.catalog_source.clone(), action_tx.clone());
        info!(
            marker = "CATALOG_LOAD_STARTED",
            operation_type = "catalog_load",
            source = %config.catalog_source,
            "Catalog load started"
        );

        Ok(Self {
            terminal,
            state: AppState::new(Arc::new(config), action_tx),
            dispatcher: ActionDispatcher::new(),
            ui_renderer: UIRenderer::new(palette),
            action_rx,
            load_handle,
        })
    }

    async fn run(mut self) -> Result<()> {
        info!("Starting event loop");

        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(TICK_INTERVAL);

        loop {
            self.render()?;

            let action = tokio::select! {
                maybe_event = event_stream.next() => match maybe_event {
                    Some(Ok(TerminalEvent::Key(key))) => Action::Key(key),
                    Some(Ok(TerminalEvent::Resize(w, h))) => Action::Resize(w, h),
                    Some(Ok(_)) => continue,
                    Some(Err(e)) => {
                        warn!("Terminal event error: {}", e);
                        continue;
                    }
                    None => {
                        info!("Terminal event stream closed");
                        break;
                    }
                },

                Some(action) = self.action_rx.recv() => action,

                _ = tick.tick() => Action::Tick,
            };

            if !matches!(action, Action::Tick) {
                debug!("Dispatching action: {:?}", action);
            }
            if self.dispatcher.handle(&mut self.state, action) == DispatchResult::Quit {
                info!("Quit requested");
                break;
            }
        }

        self.log_final_metrics();
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        if !self.state.needs_redraw() {
            return Ok(());
        }

        self.terminal
            .draw(|frame: &mut Frame<'_>| {
                self.ui_renderer.render(frame, &self.state);
            })
            .context("Failed to draw terminal")?;

        self.state.clear_redraw();
        Ok(())
    }

    fn log_final_metrics(&self) {
        let dispatcher_stats = self.dispatcher.get_stats();
        let render_stats = self.ui_renderer.get_stats();

        info!("Final metrics:");
        info!("  Session length: {:.1?}", self.state.started_at.elapsed());
        info!("  Actions processed: {}", dispatcher_stats.total_actions);
        info!("  Navigation errors: {}", dispatcher_stats.navigation_errors);
        info!(
            "  Frames: {} ({} slow, {:.1} fps)",
            render_stats.frames,
            render_stats.slow,
            render_stats.fps()
        );
        if let Some(controller) = self.state.controller() {
            let clipboard = controller.clipboard_stats();
            info!(
                "  Clipboard ({}): {} copies, {} failures",
                controller.clipboard_backend(),
                clipboard.copies,
                clipboard.failures
            );
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if !self.load_handle.is_finished() {
            self.load_handle.abort();
        }
        if let Err(e) = cleanup_terminal(&mut self.terminal) {
            warn!("Failed to cleanup terminal: {}", e);
        }
    }
}

fn setup_terminal() -> Result<AppTerminal> {
    enable_raw_mode().context("Failed to enable raw mode")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    info!("Terminal setup complete");
    Ok(terminal)
}

fn cleanup_terminal(terminal: &mut AppTerminal) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    info!("Terminal cleanup complete");
    Ok(())
}

fn setup_panic_handler() {
    let original_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info: &PanicHookInfo<'_>| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);

        error!("Application panicked: {}", panic_info);
        original_hook(panic_info);
    }));
}
