//! Find command - report who occupies a local port.

use anyhow::Result;
use portreaper_core::{OwnerService, PortOwner};

pub async fn run(port: u16, json: bool) -> Result<()> {
    let service = OwnerService::system();
    let owner = service.find_owner(port).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&owner)?);
        return Ok(());
    }

    match owner {
        PortOwner::Found { pid, info: Some(info) } => {
            println!("Port {} occupied by:", port);
            println!("   PID     : {}", pid);
            println!("   Process : {}", info.name);
            println!("   Command : {}", info.command());
        }
        PortOwner::Found { pid, info: None } => {
            println!(
                "Port {} occupied by PID {} (details unavailable, try elevated privileges)",
                port, pid
            );
        }
        PortOwner::KernelOwned => {
            println!("Port {} open (kernel-level)", port);
        }
        PortOwner::ProcessGone { pid } => {
            println!("Port {} was held by PID {}, already exited", port, pid);
        }
        PortOwner::NotFound => {
            println!("Port {} is free.", port);
        }
    }

    Ok(())
}
