//! macOS process resolution via ps.

use std::process::Stdio;

use tokio::process::Command;

use crate::domain::ProcessInfo;
use crate::error::{Error, Result};
use crate::ports::ProcessTableReader;

/// macOS process table reader backed by the `ps` command.
pub struct PsProcessTable;

impl PsProcessTable {
    pub fn new() -> Self {
        Self
    }

    /// Run `ps -p <pid> -o <column>=` and return trimmed stdout.
    ///
    /// ps exits non-zero when the pid does not exist, which is the
    /// expected enumerate/resolve race.
    async fn ps_column(&self, pid: u32, column: &str) -> Result<String> {
        let output = Command::new("/bin/ps")
            .arg("-p")
            .arg(pid.to_string())
            .arg("-o")
            .arg(format!("{}=", column))
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .output()
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => {
                    Error::Platform("ps command not found".to_string())
                }
                _ => Error::CommandFailed(format!("Failed to run ps: {}", e)),
            })?;

        if !output.status.success() {
            return Err(Error::ProcessGone(pid));
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|e| Error::Parse(format!("Invalid UTF-8 in ps output: {}", e)))?;

        let trimmed = stdout.trim();
        if trimmed.is_empty() {
            return Err(Error::ProcessGone(pid));
        }
        Ok(trimmed.to_string())
    }
}

impl Default for PsProcessTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessTableReader for PsProcessTable {
    async fn resolve(&self, pid: u32) -> Result<ProcessInfo> {
        let comm = self.ps_column(pid, "comm").await?;
        // comm is the executable path on macOS; keep the basename.
        let name = comm.rsplit('/').next().unwrap_or(&comm).to_string();

        let args = self.ps_column(pid, "args").await?;
        let cmdline = args.split_whitespace().map(str::to_string).collect();

        Ok(ProcessInfo { pid, name, cmdline })
    }
}
