// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the toast registry.
//!
//! Measures the performance of:
//! - Pushing a burst of toasts (id allocation, stacking, timer arming)
//! - Ticking a busy registry where only some timers are due
//! - Snapshotting views for a render pass

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::time::Duration;
use toastline::domain::toast::Position;
use toastline::toaster::{Content, Manager, ManualClock, NotifyOptions};

const BURST: usize = 200;

/// Builds a manager holding `BURST` toasts with staggered durations.
fn busy_manager(clock: &ManualClock) -> Manager<ManualClock> {
    let mut manager = Manager::with_clock(clock.clone());
    for i in 0..BURST {
        let position = Position::ALL[i % Position::ALL.len()];
        manager.notify(
            Content::new(format!("toast {i}")),
            NotifyOptions::new()
                .duration(Duration::from_millis(100 + i as u64))
                .position(position),
        );
    }
    manager
}

fn bench_notify_burst(c: &mut Criterion) {
    let mut group = c.benchmark_group("toaster");

    group.bench_function("notify_burst", |b| {
        b.iter(|| {
            let clock = ManualClock::new();
            black_box(busy_manager(&clock));
        });
    });

    group.finish();
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("toaster");

    group.bench_function("tick_half_due", |b| {
        b.iter_batched(
            || {
                let clock = ManualClock::new();
                let manager = busy_manager(&clock);
                clock.advance(Duration::from_millis(200));
                manager
            },
            |mut manager| black_box(manager.tick()),
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_views(c: &mut Criterion) {
    let mut group = c.benchmark_group("toaster");
    let clock = ManualClock::new();
    let manager = busy_manager(&clock);

    group.bench_function("views", |b| {
        b.iter(|| black_box(manager.views()));
    });
    group.bench_function("stack_top", |b| {
        b.iter(|| black_box(manager.stack(Position::Top).len()));
    });

    group.finish();
}

criterion_group!(benches, bench_notify_burst, bench_tick, bench_views);
criterion_main!(benches);
