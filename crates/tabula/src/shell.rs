//! Shell execution and the helpers built on it.
//!
//! HTTP is deliberately delegated to the external `curl` binary; there is no
//! native protocol implementation in this crate.
use std::{env, path::MAIN_SEPARATOR, process::Command};

/// The two platform families the library distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OsFamily {
    /// Forward-slash paths, `sh` as the shell.
    Unix,
    /// Backslash paths, `cmd` as the shell.
    Windows,
}

/// Decides the platform family from the path-separator convention.
#[must_use]
pub fn os_family() -> OsFamily {
    if MAIN_SEPARATOR == '\\' {
        OsFamily::Windows
    } else {
        OsFamily::Unix
    }
}

/// Runs `command` through the platform shell and captures its stdout.
///
/// `None` when the shell cannot be spawned or the output is not UTF-8; a
/// failing exit status still yields whatever stdout was produced.
#[must_use]
pub fn execute(command: &str) -> Option<String> {
    let output = match os_family() {
        OsFamily::Windows => Command::new("cmd").args(["/C", command]).output(),
        OsFamily::Unix => Command::new("sh").args(["-c", command]).output(),
    }
    .ok()?;
    String::from_utf8(output.stdout).ok()
}

/// The current working directory as text.
#[must_use]
pub fn working_dir() -> Option<String> {
    env::current_dir().ok().map(|path| path.display().to_string())
}

/// Fetches `url` with `curl`, returning the response body.
#[must_use]
pub fn http_get(url: &str) -> Option<String> {
    execute(&format!("curl -s {}", quote(url)))
}

/// Posts `body` to `url` with `curl`, returning the response body.
#[must_use]
pub fn http_post(url: &str, body: &str) -> Option<String> {
    execute(&format!("curl -s -X POST --data {} {}", quote(body), quote(url)))
}

// Single-quote for sh; cmd has no comparable quoting, so arguments are
// passed through as-is there.
fn quote(arg: &str) -> String {
    match os_family() {
        OsFamily::Unix => format!("'{}'", arg.replace('\'', r"'\''")),
        OsFamily::Windows => arg.to_owned(),
    }
}
