//! Unix signal delivery using nix.

use nix::errno::Errno;
use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::ports::ProcessSignaller;

/// Signal delivery for the current platform.
///
/// SIGTERM requests graceful termination (the target may intercept it);
/// SIGKILL terminates immediately and cannot be caught.
#[derive(Debug, Default)]
pub struct SystemSignaller;

impl SystemSignaller {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessSignaller for SystemSignaller {
    fn signal(&self, pid: u32, force: bool) -> Result<()> {
        let signal = if force {
            Signal::SIGKILL
        } else {
            Signal::SIGTERM
        };

        debug!(pid, signal = %signal, "sending signal");

        match kill(Pid::from_raw(pid as i32), signal) {
            Ok(()) => Ok(()),
            Err(Errno::ESRCH) => Err(Error::ProcessGone(pid)),
            Err(Errno::EPERM) => {
                warn!(pid, "permission denied sending signal");
                Err(Error::PermissionDenied(format!(
                    "not allowed to signal process {}",
                    pid
                )))
            }
            Err(errno) => Err(Error::Platform(format!(
                "kill({}, {}) failed: {}",
                pid, signal, errno
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_missing_process_reports_gone() {
        let signaller = SystemSignaller::new();

        match signaller.signal(999_999_999, false) {
            Err(Error::ProcessGone(pid)) => assert_eq!(pid, 999_999_999),
            other => panic!("expected ProcessGone, got {:?}", other),
        }
    }

    #[test]
    fn test_force_signal_kills_child() {
        let mut child = std::process::Command::new("/bin/sleep")
            .arg("30")
            .spawn()
            .expect("spawn sleep");

        let signaller = SystemSignaller::new();
        signaller.signal(child.id(), true).unwrap();

        let status = child.wait().expect("wait for child");
        assert!(!status.success());
    }
}
