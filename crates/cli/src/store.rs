//! Registry state file handling.

use std::fs;
use std::path::Path;
use whitelist_core::{WhitelistError, WhitelistResult};
use whitelist_registry::AccessRegistry;

pub fn load(path: &Path) -> WhitelistResult<AccessRegistry> {
    let raw = fs::read_to_string(path).map_err(|e| {
        WhitelistError::InvalidInput(format!("cannot read state {}: {e}", path.display()))
    })?;
    let registry = AccessRegistry::from_json(&raw)?;
    tracing::debug!(path = %path.display(), "state loaded");
    Ok(registry)
}

/// Writes to a sibling temp file first, then renames over `path`.
pub fn save(path: &Path, registry: &AccessRegistry) -> WhitelistResult<()> {
    let json = registry.to_json()?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    tracing::debug!(path = %path.display(), "state saved");
    Ok(())
}

/// Like [`save`], but refuses to replace an existing file unless `force`.
pub fn create(path: &Path, registry: &AccessRegistry, force: bool) -> WhitelistResult<()> {
    if path.exists() && !force {
        return Err(WhitelistError::InvalidInput(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    save(path, registry)
}

/// Fresh, not yet created directory under the system temp dir.
#[cfg(test)]
pub(crate) fn scratch_dir(tag: &str) -> std::path::PathBuf {
    use std::time::{SystemTime, UNIX_EPOCH};

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("whitelist-{tag}-{}-{nanos}", std::process::id()))
}
