use crossbeam_channel::bounded;
use flume::bounded as flume_bounded;
use std::sync::mpsc::sync_channel;
use std::thread;
use std::time::{Duration, Instant};
use turbo_spsc::{Cached, Observe, Queue, Uncached};

const MESSAGES: usize = 1_000_000;

struct BenchResult {
    name: &'static str,
    duration: Duration,
    throughput: f64,
}

impl BenchResult {
    fn since(name: &'static str, start: Instant) -> Self {
        let duration = start.elapsed();
        BenchResult {
            name,
            duration,
            throughput: MESSAGES as f64 / duration.as_secs_f64(),
        }
    }
}

fn main() {
    println!("\n╔═══════════════════════════════════════════════════════════════════════════╗");
    println!("║                    SPSC Queue Benchmark Results                           ║");
    println!("║                       {} messages per test                             ║", MESSAGES);
    println!("╚═══════════════════════════════════════════════════════════════════════════╝\n");

    for capacity in [16, 1024] {
        bench_1p_1c(capacity);
    }
}

fn bench_1p_1c(capacity: usize) {
    println!("┌───────────────────────────────────────────────────────────────────────────┐");
    println!("│ 1 Producer → 1 Consumer, capacity {:<40}│", capacity);
    println!("├────────────────────────┬──────────────┬─────────────────┬────────────────┤");
    println!("│ Implementation         │ Time (ms)    │ Throughput      │ Speedup        │");
    println!("├────────────────────────┼──────────────┼─────────────────┼────────────────┤");

    let results = [
        run_turbo::<Cached>("turbo_spsc (cached)", capacity),
        run_turbo::<Uncached>("turbo_spsc (uncached)", capacity),
        run_crossbeam(capacity),
        run_flume(capacity),
        run_std(capacity),
    ];

    let baseline = results[2].throughput;
    for result in &results {
        let speedup = result.throughput / baseline;
        println!(
            "│ {:<22} │ {:>12.2} │ {:>13.2} M/s │ {:>13.2}x │",
            result.name,
            result.duration.as_secs_f64() * 1000.0,
            result.throughput / 1_000_000.0,
            speedup
        );
    }
    println!("└────────────────────────┴──────────────┴─────────────────┴────────────────┘\n");
}

fn run_turbo<O: Observe>(name: &'static str, capacity: usize) -> BenchResult {
    let start = Instant::now();
    let (mut tx, mut rx) = Queue::<usize, O>::with_observer(capacity)
        .expect("capacity is non-zero")
        .split();

    let producer = thread::spawn(move || {
        for i in 0..MESSAGES {
            tx.send(i);
        }
    });

    let consumer = thread::spawn(move || {
        for _ in 0..MESSAGES {
            rx.recv();
        }
    });

    producer.join().unwrap();
    consumer.join().unwrap();

    BenchResult::since(name, start)
}

fn run_crossbeam(capacity: usize) -> BenchResult {
    let start = Instant::now();
    let (tx, rx) = bounded::<usize>(capacity);

    let producer = thread::spawn(move || {
        for i in 0..MESSAGES {
            tx.send(i).unwrap();
        }
    });

    let consumer = thread::spawn(move || {
        for _ in 0..MESSAGES {
            rx.recv().unwrap();
        }
    });

    producer.join().unwrap();
    consumer.join().unwrap();

    BenchResult::since("crossbeam_channel", start)
}

fn run_flume(capacity: usize) -> BenchResult {
    let start = Instant::now();
    let (tx, rx) = flume_bounded::<usize>(capacity);

    let producer = thread::spawn(move || {
        for i in 0..MESSAGES {
            tx.send(i).unwrap();
        }
    });

    let consumer = thread::spawn(move || {
        for _ in 0..MESSAGES {
            rx.recv().unwrap();
        }
    });

    producer.join().unwrap();
    consumer.join().unwrap();

    BenchResult::since("flume", start)
}

fn run_std(capacity: usize) -> BenchResult {
    let start = Instant::now();
    let (tx, rx) = sync_channel::<usize>(capacity);

    let producer = thread::spawn(move || {
        for i in 0..MESSAGES {
            tx.send(i).unwrap();
        }
    });

    let consumer = thread::spawn(move || {
        for _ in 0..MESSAGES {
            rx.recv().unwrap();
        }
    });

    producer.join().unwrap();
    consumer.join().unwrap();

    BenchResult::since("std_mpsc", start)
}
