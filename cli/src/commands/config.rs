//! Config command - show (and optionally initialize) the configuration.

use anyhow::Result;
use portreaper_core::ConfigStore;

pub async fn run(init: bool, json: bool) -> Result<()> {
    let store = ConfigStore::new()?;
    let config = store.load().await?;

    if init && !store.exists().await {
        store.save(&config).await?;
        if !json {
            println!("Wrote default config to {}", store.path().display());
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    println!("Config file : {}", store.path().display());
    println!("default_ports         : {}", config.default_ports);
    println!("monitor_interval_secs : {}", config.monitor_interval_secs);
    println!("probe_timeout_ms      : {}", config.probe_timeout_ms);
    println!("probe_concurrency     : {}", config.probe_concurrency);

    Ok(())
}
