#![allow(dead_code)]

use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

pub fn radref_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_radref"))
}

/// A `radref` command with catalog/log environment cleared so tests see the
/// bundled catalog unless they opt in.
pub fn radref_command() -> Command {
    let mut cmd = Command::new(radref_binary());
    cmd.env_remove("RADREF_CATALOG").env_remove("RADREF_LOG");
    cmd
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}

/// Write `value` to a temporary `.json` file that lives as long as the handle.
pub fn write_catalog(value: &Value) -> Result<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .context("failed to allocate catalog file")?;
    serde_json::to_writer_pretty(&mut file, value)?;
    file.flush()?;
    Ok(file)
}
