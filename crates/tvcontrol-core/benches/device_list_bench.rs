//! Criterion benchmarks for `devices` output parsing.
//!
//! The browser polls status every few seconds, so parsing runs once per poll
//! per open tab.  Measures a typical small list and an unusually large one.
//!
//! Run with:
//! ```bash
//! cargo bench --package tvcontrol-core --bench device_list_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tvcontrol_core::parse_device_list;

fn make_output(count: usize) -> String {
    let mut out = String::from("List of devices attached\n");
    for i in 0..count {
        if i % 3 == 0 {
            out.push_str(&format!("emulator-{}\tdevice\n", 5554 + i * 2));
        } else {
            out.push_str(&format!("192.168.1.{}:5555\toffline\n", i % 255));
        }
    }
    out
}

fn bench_parse_device_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("device_list");

    for count in [1usize, 4, 64] {
        let output = make_output(count);
        group.bench_with_input(BenchmarkId::new("parse", count), &output, |b, out| {
            b.iter(|| parse_device_list(black_box(out)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse_device_list);
criterion_main!(benches);
