use criterion::{criterion_group, criterion_main, Criterion};
use snake_engine::{
    Direction, EngineSettings, SessionRng, SnakeEngine, Status, WallCollisionMode,
};

const TURNS: [Direction; 4] = [Direction::Up, Direction::Left, Direction::Down, Direction::Right];

fn run_ticks(mode: WallCollisionMode, grid_size: usize, ticks: usize) -> u32 {
    let settings = EngineSettings {
        grid_size,
        wall_collision_mode: mode,
        ..EngineSettings::default()
    };
    let mut engine = SnakeEngine::new(settings, SessionRng::new(42), 0)
        .expect("bench settings are valid");
    engine.start();

    let mut best = 0;
    for i in 0..ticks {
        if engine.status() == Status::GameOver {
            best = best.max(engine.state().score);
            engine.reset();
        }
        if i % 7 == 0 {
            engine.set_direction(TURNS[(i / 7) % TURNS.len()]);
        }
        engine.tick();
    }
    best
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("tick_10k_death_20x20", |b| {
        b.iter(|| run_ticks(WallCollisionMode::Death, 20, 10_000))
    });
    c.bench_function("tick_10k_wrap_20x20", |b| {
        b.iter(|| run_ticks(WallCollisionMode::WrapAround, 20, 10_000))
    });
    c.bench_function("tick_10k_wrap_100x100", |b| {
        b.iter(|| run_ticks(WallCollisionMode::WrapAround, 100, 10_000))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
