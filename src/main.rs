use folio::adapters::ReqwestHttpClient;
use folio::app::App;
use folio::cli::{parse_args, run_cli_command, CliCommand, RunOptions};
use folio::contact::EmailJsRelay;
use folio::models::ContentDocument;
use folio::startup::{init_logging, FolioConfig};
use folio::terminal::{setup_panic_hook, TerminalManager};
use folio::ui;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;

fn main() -> Result<()> {
    let command = match parse_args(std::env::args()) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {}\n\n{}", e, folio::cli::USAGE);
            std::process::exit(2);
        }
    };

    if let Some(result) = run_cli_command(&command) {
        if let Err(e) = result {
            eprintln!("Error: {:?}", e);
            std::process::exit(1);
        }
        return Ok(());
    }

    color_eyre::install()?;

    let options = match command {
        CliCommand::Run(options) => options,
        _ => RunOptions::default(),
    };
    let config = build_config(FolioConfig::from_env(), &options);

    // Logging is best-effort; the viewer works without it
    match init_logging(config.log_dir.as_deref()) {
        Ok(path) => tracing::info!(log = %path.display(), "folio starting"),
        Err(e) => eprintln!("Warning: logging disabled: {}", e),
    }

    let content = ContentDocument::load_shared(config.content_path.as_deref())
        .wrap_err("Could not load the portfolio document")?;

    if !config.relay.is_configured() {
        tracing::info!(missing = ?config.relay.missing(), "Email relay not configured");
    }
    let relay = EmailJsRelay::new(Arc::new(ReqwestHttpClient::new()), config.relay.clone());

    setup_panic_hook();
    let runtime = tokio::runtime::Runtime::new()?;

    let result = runtime.block_on(async {
        let mut manager = TerminalManager::new()?;
        let size = manager.size()?;

        let mut app = App::new(content, &config).with_relay(Arc::new(relay));
        app.update_terminal_dimensions(size.width, size.height);
        app.start();

        let outcome = run_app(manager.terminal(), &mut app, config.tick_interval).await;
        app.shutdown();
        manager.restore()?;
        outcome
    });

    if let Err(e) = &result {
        tracing::error!(error = %e, "folio exited with an error");
    } else {
        tracing::info!("folio exited");
    }
    result
}

/// Apply command-line overrides on top of the environment configuration.
fn build_config(mut config: FolioConfig, options: &RunOptions) -> FolioConfig {
    if let Some(path) = &options.content {
        config = config.with_content_path(path.clone());
    }
    if let Some(section) = &options.section {
        config = config.with_initial_section(section.clone());
    }
    if options.no_anim {
        config = config
            .with_loading_delay(Duration::ZERO)
            .with_animations(false);
    }
    config
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tick_interval: Duration,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut message_rx = app.message_rx.take();
    let mut ticker = tokio::time::interval(tick_interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &mut *app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = ticker.tick() => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Mouse(mouse))) => app.handle_mouse(mouse),
                    Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                    Some(Ok(Event::Resize(width, height))) => {
                        app.update_terminal_dimensions(width, height);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!(error = %e, "Terminal event error");
                    }
                    // Input closed
                    None => return Ok(()),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
