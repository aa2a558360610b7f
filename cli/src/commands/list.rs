//! List command - show all listening ports.

use anyhow::Result;
use portreaper_core::{ProcessType, SnapshotEntry, SnapshotService};

pub async fn run(port_filter: Option<u16>, name_filter: Option<&str>, json: bool) -> Result<()> {
    let service = SnapshotService::system();
    let mut entries = service.snapshot().await?;

    entries.retain(|e| e.matches(port_filter, name_filter));

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No listening ports found.");
        return Ok(());
    }

    print_table(&entries);
    println!("\nTotal: {} ports", entries.len());
    Ok(())
}

/// Render the snapshot table. Shared with the monitor loop.
pub fn print_table(entries: &[SnapshotEntry]) {
    println!(
        "{:<6} {:<8} {:<20} {:<15} {:<8} COMMAND",
        "PORT", "PID", "PROCESS", "ADDRESS", "TYPE"
    );
    println!("{}", "-".repeat(80));

    for entry in entries {
        let type_str = match entry.process_type() {
            ProcessType::WebServer => "Web",
            ProcessType::Database => "DB",
            ProcessType::Development => "Dev",
            ProcessType::System => "Sys",
            ProcessType::Other => "-",
        };

        let pid = entry
            .pid
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string());

        println!(
            "{:<6} {:<8} {:<20} {:<15} {:<8} {}",
            entry.port,
            pid,
            truncate(&entry.process_name, 20),
            truncate(&entry.address, 15),
            type_str,
            truncate(&entry.command, 30)
        );
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max - 1).collect();
        format!("{}…", cut)
    }
}
