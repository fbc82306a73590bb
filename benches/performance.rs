use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sparklines::aggregate::DataAggregator;
use sparklines::dashboard::{Dashboard, DashboardEvent, RenderCommand};
use sparklines::fixtures::modern_season;
use sparklines::season_view::{SeasonView, SeasonViewOptions};
use sparklines::svg::render_page;
use sparklines::tui::action::Action;
use sparklines::tui::reducer::reduce;
use sparklines::tui::state::AppState;
use sparklines::types::ChartId;

/// A full modern season: 30 teams, 162 games each
const GAMES: u32 = 162;

/// Benchmark the preparation pipeline
fn bench_pipeline(c: &mut Criterion) {
    let records = modern_season(GAMES);
    let options = SeasonViewOptions::default();
    let aggregator = DataAggregator::default();

    let mut group = c.benchmark_group("pipeline");

    group.bench_function("aggregate", |b| {
        b.iter(|| aggregator.aggregate(black_box(&records)))
    });

    group.bench_function("season_view", |b| {
        b.iter(|| SeasonView::build(2015, black_box(&records), black_box(&options)))
    });

    let view = SeasonView::build(2015, &records, &options);
    let sizes = vec![sparklines::chart::Size::canonical(); view.chart_count()];
    group.bench_function("render_svg_page", |b| {
        b.iter(|| render_page(black_box(&view), black_box(&sizes), 800.0))
    });

    group.finish();
}

/// Benchmark a click that enlarges and then restores a chart
fn bench_focus_cycle(c: &mut Criterion) {
    let view = SeasonView::build(2015, &modern_season(GAMES), &SeasonViewOptions::default());
    let mut dashboard = Dashboard::new(800);
    dashboard.handle(DashboardEvent::SeasonLoaded(Box::new(view)));

    let mut group = c.benchmark_group("focus");

    group.bench_function("enlarge_restore", |b| {
        b.iter(|| {
            for _ in 0..2 {
                let mut pending = dashboard.handle(DashboardEvent::Click(black_box(ChartId(1))));
                while let Some(command) = pending.pop() {
                    if let RenderCommand::Animate { id, .. } = command {
                        pending.extend(dashboard.handle(DashboardEvent::AnimationFinished(id)));
                    }
                }
            }
        })
    });

    group.finish();
}

/// Benchmark reducer action dispatch
fn bench_reducer_dispatch(c: &mut Criterion) {
    let view = SeasonView::build(2015, &modern_season(GAMES), &SeasonViewOptions::default());
    let state = AppState::default();
    let (state, _) = reduce(state, Action::Resize(160, 60));
    let (state, _) = reduce(state, Action::SeasonLoaded(2015, Ok(Box::new(view))));

    let mut group = c.benchmark_group("reducer");

    group.bench_function("click_chart", |b| {
        b.iter(|| {
            let (new_state, _effect) = reduce(
                black_box(state.clone()),
                black_box(Action::ClickChart(ChartId(0))),
            );
            new_state
        })
    });

    group.bench_function("animation_tick", |b| {
        let (animating, _) = reduce(state.clone(), Action::ClickChart(ChartId(0)));
        b.iter(|| {
            let (new_state, _effect) = reduce(black_box(animating.clone()), black_box(Action::Tick(16)));
            new_state
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_pipeline,
    bench_focus_cycle,
    bench_reducer_dispatch
);
criterion_main!(benches);
