//! Performance benchmarks for section rendering
//!
//! Measures body layout per section and full-frame draws at common
//! terminal sizes. Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use folio::app::App;
use folio::contact::ContactForm;
use folio::models::{ContentDocument, SectionId};
use folio::startup::FolioConfig;
use folio::ui::{self, build_section_body, LayoutContext, SectionContext, Theme};
use folio::view_state::resolve;

const SIZES: [(u16, u16); 3] = [(60, 20), (100, 30), (200, 60)];

/// Benchmark building section bodies (wrapping and target layout) without drawing
fn bench_section_bodies(c: &mut Criterion) {
    let document = ContentDocument::bundled().unwrap();
    let form = ContactForm::new();
    let palette = Theme::Dark.palette();
    let mut group = c.benchmark_group("section_body");

    for section in SectionId::ALL {
        for width in [56u16, 96] {
            let ctx = SectionContext {
                width,
                layout: LayoutContext::new(width + 4, 30),
                palette,
                project_index: 0,
                contact: &form,
                contact_editing: false,
                caret_visible: false,
            };
            group.bench_with_input(
                BenchmarkId::new(section.as_str(), width),
                &ctx,
                |b, ctx| {
                    b.iter(|| {
                        let view = resolve(black_box(section), &document);
                        black_box(build_section_body(&view, ctx))
                    });
                },
            );
        }
    }

    group.finish();
}

fn settled_app(section: SectionId) -> App {
    let config = FolioConfig::new().with_animations(false);
    let mut app = App::new(ContentDocument::load_shared(None).unwrap(), &config);
    app.navigation.handle_loading_elapsed();
    app.go_to_section(section);
    app
}

/// Benchmark full frames: backdrop, nav, body, footer and hit registration
fn bench_full_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_frame");

    for section in [SectionId::Home, SectionId::Projects, SectionId::Contact] {
        for (width, height) in SIZES {
            let mut app = settled_app(section);
            let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
            group.bench_function(
                BenchmarkId::new(section.as_str(), format!("{}x{}", width, height)),
                |b| {
                    b.iter(|| {
                        terminal.draw(|f| ui::render(f, &mut app)).unwrap();
                    });
                },
            );
        }
    }

    group.finish();
}

/// Benchmark the loading screen, which redraws every tick
fn bench_loading_frame(c: &mut Criterion) {
    let config = FolioConfig::new();
    let mut app = App::new(ContentDocument::load_shared(None).unwrap(), &config);
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

    c.bench_function("loading_frame", |b| {
        b.iter(|| {
            app.tick_count = app.tick_count.wrapping_add(1);
            terminal.draw(|f| ui::render(f, &mut app)).unwrap();
        });
    });
}

criterion_group!(
    benches,
    bench_section_bodies,
    bench_full_frame,
    bench_loading_frame
);
criterion_main!(benches);
