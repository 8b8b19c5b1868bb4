use std::sync::Arc;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use tracing::{info, warn};

use ghdash::adapters::ReqwestHttpClient;
use ghdash::app::{map_key, App, AppEvent, EventOutcome};
use ghdash::config::DashboardConfig;
use ghdash::logging::init_logging;
use ghdash::terminal::{setup_panic_hook, TerminalManager, Tui};
use ghdash::traits::HttpClient;
use ghdash::ui;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    // Handle --version flag before any initialization
    if std::env::args().any(|arg| arg == "--version") {
        println!("ghdash {}", VERSION);
        return Ok(());
    }

    color_eyre::install()?;

    let config = DashboardConfig::from_env();
    if let Err(err) = init_logging(config.log_file.as_deref()) {
        eprintln!("ghdash: logging disabled: {}", err);
    }

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let http = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()?;
    let client: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::with_client(http));
    let mut app = App::new(client, config);

    let runtime = tokio::runtime::Runtime::new()?;

    let mut manager = TerminalManager::new()?;
    let size = manager.size()?;
    app.update_terminal_dimensions(size.width, size.height);

    let result = runtime.block_on(run_app(manager.terminal(), &mut app));

    manager.restore()?;
    info!("exiting");
    result
}

async fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let mut event_stream = EventStream::new();

    // Load the default username before the first key press
    run_pass(terminal, app).await?;
    let mut needs_redraw = true;

    while !app.should_quit {
        if needs_redraw {
            terminal.draw(|frame| ui::render(frame, &*app))?;
        }

        let Some(event) = event_stream.next().await else {
            break;
        };

        let events: Vec<AppEvent> = match event? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                map_key(key, app.focus).into_iter().collect()
            }
            Event::Resize(width, height) => vec![AppEvent::Resize(width, height)],
            Event::Paste(text) => text
                .chars()
                .filter(|c| !c.is_control())
                .map(AppEvent::Input)
                .collect(),
            _ => Vec::new(),
        };

        needs_redraw = false;
        for event in events {
            match app.handle_event(event) {
                EventOutcome::None => {}
                EventOutcome::Redraw => needs_redraw = true,
                EventOutcome::RunPass => {
                    run_pass(terminal, app).await?;
                    needs_redraw = true;
                }
                EventOutcome::OpenUrl(url) => {
                    open_url(app, &url);
                    needs_redraw = true;
                }
                EventOutcome::Quit => break,
            }
        }
    }

    Ok(())
}

/// Show the loading state, then run the pass to completion.
async fn run_pass(terminal: &mut Tui, app: &mut App) -> Result<()> {
    if app.begin_pass() {
        terminal.draw(|frame| ui::render(frame, &*app))?;
        app.run_pass().await;
    }
    Ok(())
}

fn open_url(app: &mut App, url: &str) {
    if let Err(err) = open::that_detached(url) {
        warn!(url, error = %err, "failed to open browser");
        app.status = Some(format!("Could not open {}", url));
    }
}
