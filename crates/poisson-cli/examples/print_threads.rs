//! Spawn a few named workers, each printing the message it was handed.
//!
//! ```text
//! cargo run -p poisson-cli --example print_threads
//! ```

use std::thread;

const MESSAGES: [&str; 3] = ["Hello", "from", "threads!"];

/// Arguments handed to one worker.
struct WorkerArgs {
    num: usize,
    msg: &'static str,
}

/// One `WorkerArgs` per message, numbered from 1.
fn worker_args() -> Vec<WorkerArgs> {
    MESSAGES
        .into_iter()
        .zip(1..)
        .map(|(msg, num)| WorkerArgs { num, msg })
        .collect()
}

fn greeting(args: &WorkerArgs) -> String {
    format!("Thread {} says: {}", args.num, args.msg)
}

fn main() {
    let handles: Vec<_> = worker_args()
        .into_iter()
        .map(|args| {
            thread::Builder::new()
                .name(format!("printer-{}", args.num))
                .spawn(move || println!("{}", greeting(&args)))
        })
        .collect::<Result<_, _>>()
        .unwrap_or_else(|e| panic!("failed to spawn worker: {e}"));

    for handle in handles {
        if handle.join().is_err() {
            eprintln!("worker panicked");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workers_are_numbered_from_one() {
        let lines: Vec<String> = worker_args().iter().map(greeting).collect();
        assert_eq!(
            lines,
            [
                "Thread 1 says: Hello",
                "Thread 2 says: from",
                "Thread 3 says: threads!",
            ]
        );
    }
}
