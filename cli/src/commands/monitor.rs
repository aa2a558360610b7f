//! Monitor command - watch listening ports until interrupted.

use std::io::stdout;
use std::time::Duration;

use anyhow::Result;
use chrono::Local;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use portreaper_core::{ConfigStore, SnapshotService};

use super::list::print_table;

pub async fn run(interval: Option<u64>) -> Result<()> {
    let config = ConfigStore::new()?.load().await.unwrap_or_default();
    let interval = interval.unwrap_or(config.monitor_interval_secs).max(1);

    let service = SnapshotService::system();

    loop {
        let entries = service.snapshot().await?;

        execute!(stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
        println!("Listening Ports | {}", Local::now().format("%H:%M:%S"));
        println!();

        if entries.is_empty() {
            println!("No listening ports found.");
        } else {
            print_table(&entries);
        }

        println!("\nRefresh: {}s | Ctrl+C to stop", interval);

        tokio::select! {
            _ = tokio::time::sleep(Duration::from_secs(interval)) => {}
            _ = tokio::signal::ctrl_c() => {
                println!("\nMonitor stopped.");
                return Ok(());
            }
        }
    }
}
