//! Core [`RuleLoader`] struct: filesystem-backed rule definition loading.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::validation::{check_rule_params, ParamsReport};

use super::definition::{LoadedRule, RuleDefinition};
use super::error::{LoadResult, LoadStatus, LoaderError, Result};

/// Filesystem-backed rule definition loader.
///
/// Scans a directory (recursively) for `*.yml` / `*.yaml` / `*.json` files,
/// deserializes them into [`RuleDefinition`]s, and keeps them keyed by name.
pub struct RuleLoader {
    /// Root directory containing rule definition files.
    rules_dir: PathBuf,
    /// Loaded definitions keyed by `name`, iterated in name order.
    rules: BTreeMap<String, LoadedRule>,
}

/// Supported definition file formats, by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DefinitionFormat {
    Yaml,
    Json,
}

impl DefinitionFormat {
    fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yml") | Some("yaml") => Some(DefinitionFormat::Yaml),
            Some("json") => Some(DefinitionFormat::Json),
            _ => None,
        }
    }
}

impl RuleLoader {
    /// Create a new loader for the given directory.
    pub fn new(rules_dir: PathBuf) -> Self {
        Self {
            rules_dir,
            rules: BTreeMap::new(),
        }
    }

    /// Recursively scan the rules directory and load all definition files.
    ///
    /// Dotfiles (filenames starting with `.`) and unsupported files are skipped.
    /// Parse errors are reported per-file but do not abort the scan.
    pub fn load_all(&mut self) -> Result<Vec<LoadResult>> {
        let mut results = Vec::new();
        let rules_dir = self.rules_dir.clone();
        self.scan_dir_recursive(&rules_dir, &mut results)?;
        Ok(results)
    }

    /// Recursively scan a directory for definition files.
    fn scan_dir_recursive(&mut self, dir: &Path, results: &mut Vec<LoadResult>) -> Result<()> {
        let mut entries = fs::read_dir(dir)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<std::io::Result<Vec<_>>>()?;
        // Deterministic order so duplicate detection is stable across platforms.
        entries.sort();

        for path in entries {
            // Skip dotfiles/dotdirs
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if name.starts_with('.') {
                    if path.is_file() {
                        results.push(LoadResult {
                            path,
                            status: LoadStatus::Skipped {
                                reason: "dotfile".to_string(),
                            },
                        });
                    }
                    continue;
                }
            }

            if path.is_dir() {
                self.scan_dir_recursive(&path, results)?;
                continue;
            }

            if DefinitionFormat::from_path(&path).is_none() {
                results.push(LoadResult {
                    path,
                    status: LoadStatus::Skipped {
                        reason: "not a YAML or JSON file".to_string(),
                    },
                });
                continue;
            }

            let status = match self.load_file(&path).and_then(|def| self.insert(&path, def)) {
                Ok(name) => {
                    info!(name = %name, path = %path.display(), "loaded rule definition");
                    LoadStatus::Loaded { name }
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to load rule definition");
                    LoadStatus::Failed {
                        error: e.to_string(),
                    }
                }
            };
            results.push(LoadResult { path, status });
        }

        Ok(())
    }

    /// Parse a single definition file.
    pub fn load_file(&self, path: &Path) -> Result<RuleDefinition> {
        let contents = fs::read_to_string(path)?;
        let definition: RuleDefinition = match DefinitionFormat::from_path(path) {
            Some(DefinitionFormat::Json) => serde_json::from_str(&contents)?,
            _ => serde_yaml::from_str(&contents)?,
        };

        if definition.name.trim().is_empty() {
            return Err(LoaderError::Invalid("rule name must not be empty".to_string()));
        }
        Ok(definition)
    }

    fn insert(&mut self, path: &Path, definition: RuleDefinition) -> Result<String> {
        let name = definition.name.clone();
        if let Some(existing) = self.rules.get(&name) {
            return Err(LoaderError::Invalid(format!(
                "duplicate rule name '{}' (already loaded from {})",
                name,
                existing.path.display()
            )));
        }
        self.rules.insert(
            name.clone(),
            LoadedRule {
                path: path.to_path_buf(),
                definition,
            },
        );
        Ok(name)
    }

    /// Get the rules directory path.
    pub fn rules_dir(&self) -> &Path {
        &self.rules_dir
    }

    /// Loaded definitions keyed by name.
    pub fn rules(&self) -> &BTreeMap<String, LoadedRule> {
        &self.rules
    }

    /// Validate the params of every loaded definition, in name order.
    pub fn validate_all(&self) -> Vec<(&LoadedRule, ParamsReport)> {
        self.rules
            .values()
            .map(|rule| {
                let report =
                    check_rule_params(&rule.definition.rule_type_id, &rule.definition.params);
                (rule, report)
            })
            .collect()
    }
}
