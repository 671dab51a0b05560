use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use daily_churn::{aggregate, render_svg};

fn synthetic_log(days: u32, files_per_day: u32) -> String {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let mut log = String::new();
    for (i, date) in start.iter_days().take(days as usize).enumerate() {
        log.push_str(&format!("@@@{}\n", date.format("%Y-%m-%d")));
        for f in 0..files_per_day {
            log.push_str(&format!("{}\t{}\tsrc/file_{f}.rs\n", i * 7 % 300, f * 3));
        }
        log.push_str("-\t-\tassets/logo.png\n\n");
    }
    log
}

fn bench_aggregate(c: &mut Criterion) {
    let log = synthetic_log(365, 40);
    let today = NaiveDate::from_ymd_opt(2024, 12, 30).unwrap();
    c.bench_function("aggregate 365 days", |b| {
        b.iter(|| aggregate(black_box(&log), 365, today))
    });
}

fn bench_render(c: &mut Criterion) {
    let log = synthetic_log(90, 10);
    let today = NaiveDate::from_ymd_opt(2024, 3, 30).unwrap();
    let days = aggregate(&log, 90, today);
    c.bench_function("render 90 days", |b| {
        b.iter(|| render_svg(black_box(&days), 1000, 320))
    });
}

criterion_group!(benches, bench_aggregate, bench_render);
criterion_main!(benches);
