use std::{
    env,
    ffi::OsString,
    path::PathBuf,
};

use anyhow::{Context, Result};
use which::which;

use crate::constants::JAVA_BINARY;

/// Finds and returns the path to the java binary
pub fn java_path() -> Result<OsString> {
    which(JAVA_BINARY)
        .map(PathBuf::into_os_string)
        .context("Cannot find a Java runtime on path (java)")
}

/// Returns the absolute, symlink-resolved directory containing the current
/// executable.
///
/// Recomputed on every call, never cached, so a relocated install is picked
/// up by the next invocation.
pub fn install_dir() -> Result<PathBuf> {
    let exe = env::current_exe().context("Could not determine path of current executable")?;
    let exe = exe
        .canonicalize()
        .with_context(|| format!("Could not resolve {}", exe.display()))?;
    let dir = exe
        .parent()
        .with_context(|| format!("{} has no parent directory", exe.display()))?;
    Ok(dir.to_path_buf())
}
