//! File-backed record store
//!
//! Persists a roster either as JSON lines (one record per line, readable and
//! diffable) or as a single bincode snapshot. The unmasked display name is
//! never written.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::error::{RosterError, RosterResult};
use crate::traits::RecordStore;
use shared::{component_debug, ComponentId, Employee};

/// On-disk encoding of a roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum StoreFormat {
    #[default]
    Json,
    Binary,
}

impl FromStr for StoreFormat {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" | "jsonl" => Ok(StoreFormat::Json),
            "binary" | "bin" | "bincode" => Ok(StoreFormat::Binary),
            _ => Err(RosterError::config("format", s)),
        }
    }
}

impl std::fmt::Display for StoreFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreFormat::Json => write!(f, "json"),
            StoreFormat::Binary => write!(f, "binary"),
        }
    }
}

/// Real file store implementation
pub struct FileStore {
    path: PathBuf,
    format: StoreFormat,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>, format: StoreFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> StoreFormat {
        self.format
    }

    fn encode(&self, employees: &[Employee]) -> RosterResult<Vec<u8>> {
        match self.format {
            StoreFormat::Json => {
                let mut content = String::new();
                for employee in employees {
                    content.push_str(&serde_json::to_string(employee)?);
                    content.push('\n');
                }
                Ok(content.into_bytes())
            }
            StoreFormat::Binary => Ok(bincode::serialize(employees)?),
        }
    }

    fn decode(&self, bytes: &[u8]) -> RosterResult<Vec<Employee>> {
        match self.format {
            StoreFormat::Json => {
                let content =
                    std::str::from_utf8(bytes).map_err(|e| RosterError::SerializationError {
                        message: format!("roster file is not UTF-8: {e}"),
                    })?;
                let mut employees = Vec::new();
                for line in content.lines() {
                    if line.trim().is_empty() {
                        continue;
                    }
                    employees.push(serde_json::from_str(line)?);
                }
                Ok(employees)
            }
            StoreFormat::Binary => Ok(bincode::deserialize(bytes)?),
        }
    }
}

#[async_trait]
impl RecordStore for FileStore {
    async fn save(&self, employees: &[Employee]) -> RosterResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let bytes = self.encode(employees)?;
        fs::write(&self.path, bytes).await?;

        component_debug!(
            ComponentId::current(),
            "💾 Saved {} records to {} ({})",
            employees.len(),
            self.path.display(),
            self.format
        );
        Ok(())
    }

    async fn load(&self) -> RosterResult<Vec<Employee>> {
        if !self.path.exists() {
            component_debug!(
                ComponentId::current(),
                "No roster file at {}, starting empty",
                self.path.display()
            );
            return Ok(Vec::new());
        }

        let bytes = fs::read(&self.path).await?;
        let employees = self.decode(&bytes)?;

        component_debug!(
            ComponentId::current(),
            "📂 Loaded {} records from {} ({})",
            employees.len(),
            self.path.display(),
            self.format
        );
        Ok(employees)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
