use anyhow::{Context, Result, anyhow, bail};
use classforge_model::BuildOptions;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Top-level options document.
///
/// ```json
/// {
///   "extends": "./base.json",
///   "buildOptions": { "rejectReservedMembers": false }
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassforgeConfig {
    #[serde(default)]
    pub extends: Option<String>,
    #[serde(default)]
    pub build_options: BuildOptions,
}

/// Parse an options document and return its build options.
pub fn parse_options(source: &str) -> Result<BuildOptions> {
    let config: ClassforgeConfig =
        serde_json::from_str(source).context("failed to parse classforge options JSON")?;
    Ok(config.build_options)
}

/// Load an options file, following `extends` chains. Keys in the extending
/// file override the file it extends.
pub fn load_options(path: &Path) -> Result<BuildOptions> {
    let mut visited = HashSet::new();
    let merged = load_json_inner(path, &mut visited)?;
    let config: ClassforgeConfig = serde_json::from_value(merged)
        .with_context(|| format!("invalid classforge options: {}", path.display()))?;
    Ok(config.build_options)
}

fn load_json_inner(path: &Path, visited: &mut HashSet<PathBuf>) -> Result<JsonValue> {
    let canonical = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    if !visited.insert(canonical.clone()) {
        bail!("options extends cycle detected at {}", canonical.display());
    }

    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read options: {}", path.display()))?;
    let mut config: JsonValue = serde_json::from_str(&source)
        .with_context(|| format!("failed to parse options: {}", path.display()))?;

    let extends = config
        .as_object_mut()
        .and_then(|object| object.remove("extends"));
    if let Some(extends) = extends {
        let extends = extends
            .as_str()
            .ok_or_else(|| anyhow!("`extends` must be a string in {}", path.display()))?;
        let base_path = resolve_extends_path(path, extends)?;
        let base = load_json_inner(&base_path, visited)?;
        config = merge_json(base, config);
    }

    visited.remove(&canonical);
    Ok(config)
}

fn resolve_extends_path(current_path: &Path, extends: &str) -> Result<PathBuf> {
    let base_dir = current_path
        .parent()
        .ok_or_else(|| anyhow!("options file has no parent directory"))?;
    let mut candidate = PathBuf::from(extends);
    if candidate.extension().is_none() {
        candidate.set_extension("json");
    }

    if candidate.is_absolute() {
        Ok(candidate)
    } else {
        Ok(base_dir.join(candidate))
    }
}

/// Recursively overlays `child` onto `base`. Non-object values replace.
fn merge_json(base: JsonValue, child: JsonValue) -> JsonValue {
    match (base, child) {
        (JsonValue::Object(mut base), JsonValue::Object(child)) => {
            for (key, child_value) in child {
                let merged = match base.remove(&key) {
                    Some(base_value) => merge_json(base_value, child_value),
                    None => child_value,
                };
                base.insert(key, merged);
            }
            JsonValue::Object(base)
        }
        (_, child) => child,
    }
}
