use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::sync::mpsc::sync_channel;
use std::thread;

use crossbeam_channel::bounded;
use flume::bounded as flume_bounded;
use turbo_spsc::{Cached, Observe, Queue, Uncached};

const MESSAGES: usize = 1_000_000;
const BUFFER_SIZE: usize = 1024;

fn run_turbo<O: Observe>(capacity: usize) {
    let (mut tx, mut rx) = Queue::<usize, O>::with_observer(capacity).unwrap().split();

    let producer = thread::spawn(move || {
        for i in 0..MESSAGES {
            tx.send(black_box(i));
        }
    });

    let consumer = thread::spawn(move || {
        for _ in 0..MESSAGES {
            black_box(rx.recv());
        }
    });

    producer.join().unwrap();
    consumer.join().unwrap();
}

fn bench_1p_1c(c: &mut Criterion) {
    let mut group = c.benchmark_group("1p_1c");
    group.throughput(Throughput::Elements(MESSAGES as u64));

    group.bench_function("turbo_spsc_cached", |b| {
        b.iter(|| run_turbo::<Cached>(BUFFER_SIZE));
    });

    group.bench_function("turbo_spsc_uncached", |b| {
        b.iter(|| run_turbo::<Uncached>(BUFFER_SIZE));
    });

    group.bench_function("crossbeam_channel", |b| {
        b.iter(|| {
            let (tx, rx) = bounded::<usize>(BUFFER_SIZE);

            let producer = thread::spawn(move || {
                for i in 0..MESSAGES {
                    tx.send(black_box(i)).unwrap();
                }
            });

            let consumer = thread::spawn(move || {
                for _ in 0..MESSAGES {
                    rx.recv().unwrap();
                }
            });

            producer.join().unwrap();
            consumer.join().unwrap();
        });
    });

    group.bench_function("flume", |b| {
        b.iter(|| {
            let (tx, rx) = flume_bounded::<usize>(BUFFER_SIZE);

            let producer = thread::spawn(move || {
                for i in 0..MESSAGES {
                    tx.send(black_box(i)).unwrap();
                }
            });

            let consumer = thread::spawn(move || {
                for _ in 0..MESSAGES {
                    rx.recv().unwrap();
                }
            });

            producer.join().unwrap();
            consumer.join().unwrap();
        });
    });

    group.bench_function("std_mpsc", |b| {
        b.iter(|| {
            let (tx, rx) = sync_channel::<usize>(BUFFER_SIZE);

            let producer = thread::spawn(move || {
                for i in 0..MESSAGES {
                    tx.send(black_box(i)).unwrap();
                }
            });

            let consumer = thread::spawn(move || {
                for _ in 0..MESSAGES {
                    rx.recv().unwrap();
                }
            });

            producer.join().unwrap();
            consumer.join().unwrap();
        });
    });

    group.finish();
}

// Small capacities keep the queue near full or empty, where the cached
// cursor has to be refreshed most often.
fn bench_capacity_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("capacity_sweep");
    group.throughput(Throughput::Elements(MESSAGES as u64));
    group.sample_size(20);

    for capacity in [1, 10, 128, 4096] {
        group.bench_with_input(BenchmarkId::new("cached", capacity), &capacity, |b, &cap| {
            b.iter(|| run_turbo::<Cached>(cap));
        });
        group.bench_with_input(BenchmarkId::new("uncached", capacity), &capacity, |b, &cap| {
            b.iter(|| run_turbo::<Uncached>(cap));
        });
    }

    group.finish();
}

fn bench_single_thread(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_thread");
    group.throughput(Throughput::Elements(BUFFER_SIZE as u64));

    group.bench_function("offer_poll_burst", |b| {
        let mut queue = Queue::<usize>::new(BUFFER_SIZE).unwrap();
        b.iter(|| {
            for i in 0..BUFFER_SIZE {
                let _ = queue.offer(black_box(i));
            }
            while let Some(v) = queue.poll() {
                black_box(v);
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_1p_1c, bench_capacity_sweep, bench_single_thread);
criterion_main!(benches);
