//! Simple usage example

use std::thread;
use std::time::Duration;

use tracing_subscriber::EnvFilter;
use turbo_spsc::{CapacityError, Queue};

fn main() -> Result<(), CapacityError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    println!("Turbo SPSC - Simple Example\n");

    // Create a queue with 4 slots and hand each half to its own thread
    let (mut tx, mut rx) = Queue::<String>::new(4)?.split();

    let producer = thread::spawn(move || {
        for i in 0..10 {
            let mut message = format!("Message {}", i);
            println!("Sending: {}", message);

            // Queue is full: spin and retry with the same message
            while let Err(full) = tx.offer(message) {
                message = full.into_inner();
                std::hint::spin_loop();
            }

            // Small delay to make output readable
            thread::sleep(Duration::from_millis(100));
        }
        println!("Producer finished!");
        tx
    });

    let consumer = thread::spawn(move || {
        for _ in 0..10 {
            let message = rx.recv();
            println!("Received: {}", message);
        }
        println!("Consumer finished!");
        rx
    });

    let tx = producer.join().expect("producer panicked");
    let rx = consumer.join().expect("consumer panicked");

    if let Ok(queue) = Queue::reunite(tx, rx) {
        println!("\nLeft in queue: {}", queue.len());
    }
    println!("Example completed successfully!");
    Ok(())
}
