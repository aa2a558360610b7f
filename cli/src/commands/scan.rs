//! Scan command - probe a host for open TCP ports.

use std::time::Duration;

use anyhow::Result;
use portreaper_core::{ConfigStore, PortProbe, PortSpec};

pub async fn run(host: &str, ports: Option<&str>, json: bool) -> Result<()> {
    let config = ConfigStore::new()?.load().await.unwrap_or_default();

    let spec: PortSpec = ports.unwrap_or(&config.default_ports).parse()?;
    let probe = PortProbe::new(
        Duration::from_millis(config.probe_timeout_ms),
        config.probe_concurrency,
    );

    if !json {
        println!("Scanning {} ({} ports)...", host, spec.len());
    }

    // A failed probe (unresolvable host) is the one case that exits
    // non-zero; a quiet host is a normal empty report.
    let report = probe.scan(host, &spec).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if report.open.is_empty() {
        println!("No open ports on {} ({})", report.host, report.addr);
    } else {
        println!("Open ports on {} ({}):", report.host, report.addr);
        for port in &report.open {
            println!("   {}/tcp", port);
        }
    }

    Ok(())
}
