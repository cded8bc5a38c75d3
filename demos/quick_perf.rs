use std::thread;
use std::time::{Duration, Instant};

use turbo_spsc::{Cached, Observe, Queue, Uncached};

const MESSAGES: usize = 1_000_000;
const BUFFER_SIZE: usize = 1024;

fn main() {
    println!("Turbo SPSC Performance Test");
    println!("==============================\n");

    for capacity in [10, BUFFER_SIZE] {
        println!("Cached cursors, capacity {} ({} messages):", capacity, MESSAGES);
        report(run::<Cached>(capacity));

        println!("Uncached cursors, capacity {} ({} messages):", capacity, MESSAGES);
        report(run::<Uncached>(capacity));
    }
}

fn report(elapsed: Duration) {
    let throughput = MESSAGES as f64 / elapsed.as_secs_f64();
    println!("  Time: {:?}", elapsed);
    println!("  Throughput: {:.2} msgs/sec", throughput);
    println!("  Latency: {:.0} ns/op\n", elapsed.as_nanos() as f64 / MESSAGES as f64);
}

fn run<O: Observe>(capacity: usize) -> Duration {
    let (mut tx, mut rx) = Queue::<usize, O>::with_observer(capacity)
        .expect("capacity is non-zero")
        .split();

    let start = Instant::now();

    let producer = thread::spawn(move || {
        for i in 0..MESSAGES {
            tx.send(i);
        }
    });

    let consumer = thread::spawn(move || {
        let mut sum = 0usize;
        for _ in 0..MESSAGES {
            sum = sum.wrapping_add(rx.recv());
        }
        sum
    });

    producer.join().unwrap();
    let sum = consumer.join().unwrap();
    let elapsed = start.elapsed();

    assert_eq!(sum, (0..MESSAGES).sum::<usize>());
    elapsed
}
