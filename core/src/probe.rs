//! Remote open-port probing.
//!
//! A plain TCP connect scan: a port is reported open when a connection
//! attempt completes within the timeout. The owner lookup services never
//! depend on this module; the CLI `scan` command delegates to it directly.

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use serde::Serialize;
use tokio::net::{lookup_host, TcpStream};
use tokio::task::JoinSet;
use tokio::time::timeout;
use tracing::debug;

use crate::error::{Error, Result};

/// A parsed port specification such as `1-1024` or `80,443,8000-8100`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortSpec {
    ports: Vec<u16>,
}

impl PortSpec {
    /// The ports in ascending order, deduplicated.
    pub fn ports(&self) -> &[u16] {
        &self.ports
    }

    pub fn len(&self) -> usize {
        self.ports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }
}

impl FromStr for PortSpec {
    type Err = Error;

    fn from_str(spec: &str) -> Result<Self> {
        let mut ports = Vec::new();

        for token in spec.split(',') {
            let token = token.trim();
            if token.is_empty() {
                return Err(Error::Parse(format!("empty entry in port spec '{}'", spec)));
            }

            match token.split_once('-') {
                Some((start, end)) => {
                    let start = parse_port(start)?;
                    let end = parse_port(end)?;
                    if start > end {
                        return Err(Error::Parse(format!(
                            "reversed port range '{}'",
                            token
                        )));
                    }
                    ports.extend(start..=end);
                }
                None => ports.push(parse_port(token)?),
            }
        }

        ports.sort_unstable();
        ports.dedup();
        Ok(Self { ports })
    }
}

fn parse_port(s: &str) -> Result<u16> {
    let port: u16 = s
        .trim()
        .parse()
        .map_err(|_| Error::Parse(format!("invalid port '{}'", s)))?;
    if port == 0 {
        return Err(Error::Parse("port 0 is not probeable".to_string()));
    }
    Ok(port)
}

/// Result of probing one host.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    /// Host as given by the caller.
    pub host: String,

    /// Address the probes were sent to.
    pub addr: IpAddr,

    /// Open ports, ascending.
    pub open: Vec<u16>,
}

/// TCP connect prober.
pub struct PortProbe {
    timeout: Duration,
    concurrency: usize,
}

impl PortProbe {
    /// Create a prober with the given per-port timeout and number of
    /// in-flight connection attempts.
    pub fn new(timeout: Duration, concurrency: usize) -> Self {
        Self {
            timeout,
            concurrency: concurrency.max(1),
        }
    }

    /// Probe `host` for open TCP ports among `spec`.
    ///
    /// Name resolution failure is the only hard error; an unreachable or
    /// fully filtered host simply reports no open ports.
    pub async fn scan(&self, host: &str, spec: &PortSpec) -> Result<ScanReport> {
        let addr = lookup_host((host, 0u16))
            .await
            .map_err(|e| Error::Platform(format!("cannot resolve host '{}': {}", host, e)))?
            .map(|sa| sa.ip())
            .next()
            .ok_or_else(|| Error::Platform(format!("host '{}' has no addresses", host)))?;

        debug!(host, %addr, ports = spec.len(), "starting connect scan");

        let mut open = Vec::new();
        for chunk in spec.ports().chunks(self.concurrency) {
            let mut attempts = JoinSet::new();
            for &port in chunk {
                let target = SocketAddr::new(addr, port);
                let per_port = self.timeout;
                attempts.spawn(async move {
                    match timeout(per_port, TcpStream::connect(target)).await {
                        Ok(Ok(_stream)) => Some(port),
                        // Refused, unreachable, or timed out: not open.
                        _ => None,
                    }
                });
            }
            while let Some(joined) = attempts.join_next().await {
                if let Ok(Some(port)) = joined {
                    open.push(port);
                }
            }
        }

        open.sort_unstable();
        Ok(ScanReport {
            host: host.to_string(),
            addr,
            open,
        })
    }
}

impl Default for PortProbe {
    fn default() -> Self {
        Self::new(Duration::from_millis(250), 128)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    #[test]
    fn test_parse_single_ports() {
        let spec: PortSpec = "80,443".parse().unwrap();
        assert_eq!(spec.ports(), &[80, 443]);
    }

    #[test]
    fn test_parse_range() {
        let spec: PortSpec = "8000-8003".parse().unwrap();
        assert_eq!(spec.ports(), &[8000, 8001, 8002, 8003]);
    }

    #[test]
    fn test_parse_mixed_sorts_and_dedups() {
        let spec: PortSpec = "443,80,442-444".parse().unwrap();
        assert_eq!(spec.ports(), &[80, 442, 443, 444]);
    }

    #[test]
    fn test_parse_rejects_bad_specs() {
        assert!("".parse::<PortSpec>().is_err());
        assert!("80,".parse::<PortSpec>().is_err());
        assert!("abc".parse::<PortSpec>().is_err());
        assert!("1024-80".parse::<PortSpec>().is_err());
        assert!("0".parse::<PortSpec>().is_err());
        assert!("70000".parse::<PortSpec>().is_err());
    }

    #[tokio::test]
    async fn test_scan_finds_local_listener() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let spec: PortSpec = port.to_string().parse().unwrap();
        let probe = PortProbe::new(Duration::from_millis(500), 16);

        let report = probe.scan("127.0.0.1", &spec).await.unwrap();
        assert_eq!(report.open, vec![port]);
        drop(listener);
    }

    #[tokio::test]
    async fn test_scan_unresolvable_host_is_an_error() {
        let spec: PortSpec = "80".parse().unwrap();
        let probe = PortProbe::default();

        assert!(probe
            .scan("definitely-not-a-real-host.invalid", &spec)
            .await
            .is_err());
    }
}
