mod tui;

use std::time::Duration;

use anyhow::Result;
use chrono::{Days, Local};
use clap::Parser;
use tasksweep_core::{Priority, TaskStore};

#[derive(Parser)]
#[command(name = "tasksweep")]
#[command(about = "An in-memory task manager with sequential auto-completion", long_about = None)]
struct Cli {
    /// Delay between sequential completions, in milliseconds
    #[arg(long, default_value_t = 1000)]
    interval_ms: u64,

    /// Start with a handful of sample tasks
    #[arg(long)]
    demo: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut store = TaskStore::new();
    if cli.demo {
        seed_demo(&mut store);
    }

    tui::run(store, Duration::from_millis(cli.interval_ms))
}

fn seed_demo(store: &mut TaskStore) {
    let today = Local::now().date_naive();
    store.add(
        "File expense report".to_string(),
        "Q3 travel receipts".to_string(),
        today.checked_add_days(Days::new(1)),
        Priority::High,
    );
    store.add(
        "Water the plants".to_string(),
        String::new(),
        None,
        Priority::Low,
    );
    store.add(
        "Review pull request".to_string(),
        "store refactor".to_string(),
        today.checked_add_days(Days::new(2)),
        Priority::High,
    );
    store.add(
        "Book dentist appointment".to_string(),
        String::new(),
        today.checked_add_days(Days::new(14)),
        Priority::Medium,
    );
}
