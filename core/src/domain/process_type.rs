//! Process type categorization based on process names.

use serde::{Deserialize, Serialize};

/// Category of process based on its function.
///
/// Detection is a name heuristic used by the display layer only; lookups
/// and terminations never consult it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum ProcessType {
    /// Web servers (nginx, apache, caddy, etc.)
    WebServer,
    /// Database servers (postgres, mysql, redis, etc.)
    Database,
    /// Development tools (node, python, vite, etc.)
    Development,
    /// System processes (systemd, launchd, kernel services, etc.)
    System,
    /// Other/unknown processes
    #[default]
    Other,
}

impl ProcessType {
    /// Detect the process type from a process name (case-insensitive).
    pub fn detect(process_name: &str) -> Self {
        let name = process_name.to_lowercase();

        const WEB_SERVERS: &[&str] = &[
            "nginx", "apache", "httpd", "caddy", "traefik", "lighttpd", "envoy",
        ];
        if WEB_SERVERS.iter().any(|s| name.contains(s)) {
            return ProcessType::WebServer;
        }

        const DATABASES: &[&str] = &[
            "postgres",
            "mysql",
            "mariadb",
            "redis",
            "mongo",
            "sqlite",
            "clickhouse",
            "cassandra",
            "elasticsearch",
            "memcached",
        ];
        if DATABASES.iter().any(|s| name.contains(s)) {
            return ProcessType::Database;
        }

        const DEV_TOOLS: &[&str] = &[
            "node", "npm", "yarn", "pnpm", "bun", "deno", "python", "ruby", "php", "java",
            "cargo", "rustc", "vite", "webpack", "esbuild", "next", "nuxt", "flask", "uvicorn",
        ];
        if DEV_TOOLS.iter().any(|s| name.contains(s)) {
            return ProcessType::Development;
        }

        const SYSTEM_PROCS: &[&str] = &[
            "systemd", "init", "dbus", "udev", "launchd", "kernel", "rpcbind", "avahi",
            "cupsd", "sshd", "system",
        ];
        if SYSTEM_PROCS.iter().any(|s| name.contains(s)) {
            return ProcessType::System;
        }

        ProcessType::Other
    }

    /// Get the display name for this process type.
    pub fn display_name(&self) -> &'static str {
        match self {
            ProcessType::WebServer => "Web Server",
            ProcessType::Database => "Database",
            ProcessType::Development => "Development",
            ProcessType::System => "System",
            ProcessType::Other => "Other",
        }
    }
}

impl std::fmt::Display for ProcessType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
