//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

use folio::app::{App, LinkOpener};
use folio::models::ContentDocument;
use folio::startup::FolioConfig;
use folio::ui;

pub fn content() -> Arc<ContentDocument> {
    ContentDocument::load_shared(None).unwrap()
}

/// Config with a short loading gate and no animations, so tests see
/// settled frames.
pub fn test_config() -> FolioConfig {
    FolioConfig::new()
        .with_loading_delay(Duration::from_millis(50))
        .with_animations(false)
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Opener that records targets instead of launching anything.
pub fn recording_opener() -> (LinkOpener, Arc<Mutex<Vec<String>>>) {
    let opened = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&opened);
    let opener: LinkOpener = Box::new(move |target: &str| {
        sink.lock().unwrap().push(target.to_string());
        Ok(())
    });
    (opener, opened)
}

/// Start the app and let the loading gate elapse. Requires paused time.
pub async fn started_app(config: &FolioConfig) -> App {
    let mut app = App::new(content(), config);
    app.start();
    tokio::time::sleep(config.loading_delay + Duration::from_millis(1)).await;
    drain_messages(&mut app).await;
    assert!(!app.is_loading());
    app
}

/// Apply every message already posted to the app channel.
pub async fn drain_messages(app: &mut App) {
    // Let spawned tasks run first
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
    let mut rx = app.message_rx.take().unwrap();
    while let Ok(msg) = rx.try_recv() {
        app.handle_message(msg);
    }
    app.message_rx = Some(rx);
}

pub fn render(app: &mut App, width: u16, height: u16) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::render(f, app)).unwrap();
    terminal.backend().buffer().clone()
}

pub fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
