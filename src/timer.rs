use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use chrono::Utc;

#[derive(Debug, Clone)]
pub enum TimerEvent {
    Tick(i64),
}

/// Ticks once a second with the number of seconds since the session opened.
pub fn spawn_elapsed_timer() -> mpsc::Receiver<TimerEvent> {
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let started = Utc::now();

        loop {
            let elapsed = Utc::now().signed_duration_since(started).num_seconds();
            if tx.send(TimerEvent::Tick(elapsed)).is_err() {
                break;
            }
            thread::sleep(Duration::from_secs(1));
        }
    });

    rx
}

pub fn format_elapsed(total_secs: i64) -> String {
    if total_secs <= 0 {
        return "0s".to_string();
    }
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    if hours > 0 {
        format!("{}h {:02}m {:02}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {:02}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}
