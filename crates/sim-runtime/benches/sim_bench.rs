use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sim_core::ResearchTrack;
use sim_runtime::Session;

fn run_session(units: u64) -> i64 {
    let mut session = Session::new(42);
    for track in ResearchTrack::ALL {
        let _ = session.invest_research(track, 150);
    }
    while session.create_product().is_ok() {}
    let _ = session.advance(units);
    session.state().balance
}

fn bench_ticks(c: &mut Criterion) {
    c.bench_function("session 10k time units", |b| {
        b.iter(|| black_box(run_session(10_000)))
    });
}

criterion_group!(benches, bench_ticks);
criterion_main!(benches);
