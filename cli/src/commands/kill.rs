//! Kill command - terminate the process on a local port.

use anyhow::Result;
use portreaper_core::{OwnerService, TerminationOutcome};

pub async fn run(port: u16, force: bool, json: bool) -> Result<()> {
    let service = OwnerService::system();
    let outcome = service.terminate_owner(port, force).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    match outcome {
        TerminationOutcome::Signalled { pid, name, forced } => {
            let signal = if forced { "SIGKILL" } else { "SIGTERM" };
            match name {
                Some(name) => println!(
                    "Sent {} to {} (PID {}) on port {}",
                    signal, name, pid, port
                ),
                None => println!("Sent {} to PID {} on port {}", signal, pid, port),
            }
        }
        TerminationOutcome::NothingToKill => {
            println!("Nothing to reap on port {}", port);
        }
        TerminationOutcome::AlreadyGone { pid } => {
            println!("Process {} on port {} already exited", pid, port);
        }
        TerminationOutcome::PermissionDenied { pid } => {
            println!(
                "Not allowed to signal PID {} on port {}; try elevated privileges",
                pid, port
            );
        }
    }

    Ok(())
}
