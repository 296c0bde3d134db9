//! Criterion benchmarks for the action and channel tables.
//!
//! Measures action-name parsing, key-sequence expansion and channel
//! decomposition.  All of these run before any process is spawned, so they
//! should stay far below the per-keystroke delay.
//!
//! Run with:
//! ```bash
//! cargo bench --package tvcontrol-core --bench keymap_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tvcontrol_core::{channel_key_sequence, Action};

/// Names that cover the start, middle and end of the action table.
const BENCH_ACTION_NAMES: &[&str] = &[
    "power_toggle",
    "volume_up",
    "dpad_center",
    "color_blue",
    "digit_9",
    "not_an_action",
];

fn bench_parse_action(c: &mut Criterion) {
    let mut group = c.benchmark_group("keymap_parse");

    for name in BENCH_ACTION_NAMES {
        group.bench_with_input(BenchmarkId::new("parse", name), name, |b, &name| {
            b.iter(|| black_box(name).parse::<Action>())
        });
    }

    group.finish();
}

fn bench_key_events(c: &mut Criterion) {
    let mut group = c.benchmark_group("keymap_expand");

    group.bench_function("key_events_all_actions", |b| {
        b.iter(|| {
            Action::ALL
                .iter()
                .map(|&a| black_box(a).key_events().len())
                .sum::<usize>()
        })
    });

    group.finish();
}

fn bench_channel_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("keymap_channel");

    for channel in ["7", "101", "999999", "12a"] {
        group.bench_with_input(BenchmarkId::new("channel", channel), &channel, |b, &ch| {
            b.iter(|| channel_key_sequence(black_box(ch), true))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_action,
    bench_key_events,
    bench_channel_sequence,
);
criterion_main!(benches);
