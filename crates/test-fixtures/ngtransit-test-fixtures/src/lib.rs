use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    transitions: HashMap<String, TransitionEntry>,
}

/// A configuration paired with the trigger text it must generate.
#[derive(Debug, Deserialize)]
struct TransitionEntry {
    config: String,
    expected: String,
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn resolve_path(rel: &str) -> PathBuf {
    fixtures_root().join(rel)
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = resolve_path(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

fn load_json<T: DeserializeOwned>(rel: &str) -> Result<T> {
    let text = read_to_string(rel)?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse JSON fixture {rel}"))
}

fn lookup<'a, T>(map: &'a HashMap<String, T>, kind: &str, name: &str) -> Result<&'a T> {
    map.get(name)
        .ok_or_else(|| anyhow!("unknown {kind} fixture '{name}'"))
}

pub mod transitions {
    use super::*;

    pub fn keys() -> Vec<String> {
        let mut keys: Vec<String> = MANIFEST.transitions.keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn config_json(name: &str) -> Result<String> {
        let entry = lookup(&MANIFEST.transitions, "transition", name)?;
        read_to_string(&entry.config)
    }

    pub fn config<T: DeserializeOwned>(name: &str) -> Result<T> {
        let entry = lookup(&MANIFEST.transitions, "transition", name)?;
        super::load_json(&entry.config)
    }

    /// Expected generator output. A single trailing newline in the file is ignored.
    pub fn expected(name: &str) -> Result<String> {
        let entry = lookup(&MANIFEST.transitions, "transition", name)?;
        let text = read_to_string(&entry.expected)?;
        Ok(text.strip_suffix('\n').unwrap_or(&text).to_string())
    }

    pub fn config_path(name: &str) -> Result<PathBuf> {
        let entry = lookup(&MANIFEST.transitions, "transition", name)?;
        Ok(resolve_path(&entry.config))
    }
}
