//! Two-stage pipeline: producer -> worker -> collector, one SPSC queue per hop.

use std::thread;
use std::time::Duration;

use tracing_subscriber::EnvFilter;
use turbo_spsc::{CapacityError, Queue};

const NUM_JOBS: usize = 20;

enum Job {
    Work(String),
    Done,
}

fn main() -> Result<(), CapacityError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("Pipeline Example\n");

    let (mut jobs_tx, mut jobs_rx) = Queue::<Job>::new(8)?.split();
    let (mut results_tx, mut results_rx) = Queue::<String>::new(8)?.split();

    let producer = thread::spawn(move || {
        for i in 0..NUM_JOBS {
            let job = format!("Job-{:02}", i);
            println!("Enqueued: {}", job);
            jobs_tx.send(Job::Work(job));
        }
        jobs_tx.send(Job::Done);
        println!("All jobs enqueued!");
    });

    let worker = thread::spawn(move || {
        let mut processed = 0;
        loop {
            match jobs_rx.recv() {
                Job::Work(job) => {
                    println!("Worker processing: {}", job);
                    thread::sleep(Duration::from_millis(20));
                    results_tx.send(format!("{} -> completed", job));
                    processed += 1;
                }
                Job::Done => break,
            }
        }
        println!("Worker finished ({} jobs)", processed);
    });

    let collector = thread::spawn(move || {
        for _ in 0..NUM_JOBS {
            println!("Result: {}", results_rx.recv());
        }
        println!("All results collected!");
    });

    producer.join().expect("producer panicked");
    worker.join().expect("worker panicked");
    collector.join().expect("collector panicked");

    println!("\nPipeline example completed!");
    Ok(())
}
