//! Descriptor file loading
//!
//! Descriptors commonly live as `.json` documents next to the application
//! that owns them. The loader reads every descriptor file in a directory,
//! converts each one against a hook registry, and keeps the resolved
//! definitions indexed by file stem (`user.json` -> `user`).

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::convert::DescriptorConverter;
use crate::definition::Definition;
use crate::errors::{SchemaGenError, SchemaGenResult};
use crate::registry::HookRegistry;

/// Loads descriptor files and holds their resolved definitions.
pub struct DescriptorLoader {
    /// Directory containing descriptor files
    descriptor_dir: PathBuf,
    /// Resolved definitions indexed by name
    definitions: HashMap<String, Definition>,
}

impl DescriptorLoader {
    /// Creates a loader rooted at the given descriptor directory.
    pub fn new(descriptor_dir: impl Into<PathBuf>) -> Self {
        Self {
            descriptor_dir: descriptor_dir.into(),
            definitions: HashMap::new(),
        }
    }

    /// Returns the descriptor directory path.
    pub fn descriptor_dir(&self) -> &Path {
        &self.descriptor_dir
    }

    /// Loads every descriptor file in the directory.
    ///
    /// Non-JSON extensions are skipped. A file that cannot be read or
    /// parsed fails with `MalformedDescriptor`; conversion failures
    /// propagate unchanged. The first failure aborts the load.
    pub fn load_all(&mut self, registry: &HookRegistry) -> SchemaGenResult<()> {
        if !self.descriptor_dir.exists() {
            debug!(dir = %self.descriptor_dir.display(), "descriptor directory absent, nothing to load");
            return Ok(());
        }

        let entries = fs::read_dir(&self.descriptor_dir).map_err(|e| {
            SchemaGenError::malformed(
                self.descriptor_dir.display().to_string(),
                format!("failed to read descriptor directory: {}", e),
            )
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| {
                SchemaGenError::malformed(
                    self.descriptor_dir.display().to_string(),
                    format!("failed to read directory entry: {}", e),
                )
            })?;

            let path = entry.path();
            if path.extension().map_or(true, |ext| ext != "json") {
                continue;
            }

            self.load_file(&path, registry)?;
        }

        Ok(())
    }

    /// Loads a single descriptor file.
    pub fn load_file(&mut self, path: &Path, registry: &HookRegistry) -> SchemaGenResult<()> {
        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .map(str::to_string)
            .ok_or_else(|| {
                SchemaGenError::malformed(
                    path.display().to_string(),
                    "file name is not valid UTF-8",
                )
            })?;

        let content = fs::read_to_string(path).map_err(|e| {
            SchemaGenError::malformed(
                path.display().to_string(),
                format!("failed to read file: {}", e),
            )
        })?;

        let descriptor: Value = serde_json::from_str(&content).map_err(|e| {
            SchemaGenError::malformed(path.display().to_string(), format!("invalid JSON: {}", e))
        })?;

        self.insert(name, &descriptor, registry)
    }

    /// Converts and stores a descriptor directly (for programmatic use).
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        descriptor: &Value,
        registry: &HookRegistry,
    ) -> SchemaGenResult<()> {
        let name = name.into();
        let definition = DescriptorConverter::new(registry).convert(descriptor)?;
        debug!(name = %name, "descriptor loaded");
        self.definitions.insert(name, definition);
        Ok(())
    }

    /// Gets a resolved definition by name.
    pub fn get(&self, name: &str) -> Option<&Definition> {
        self.definitions.get(name)
    }

    /// Returns the loaded definition names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(String::as_str)
    }

    /// Returns the number of loaded definitions.
    pub fn definition_count(&self) -> usize {
        self.definitions.len()
    }
}
