//! Core shared types and identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Employee number, also used as the list id of a record
pub type EmployeeNumber = u32;

/// Global component ID - set once at startup, used for log attribution only
static COMPONENT_ID: OnceLock<ComponentId> = OnceLock::new();

/// Identifier for the binary a log line came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentId {
    /// Interactive roster front end
    Roster,
    /// Bulk generation and sort benchmarking
    LoadGen,
    /// Library code running without an initialised binary (tests, embedding)
    Embedded,
}

impl ComponentId {
    /// Initialize the global component ID for the roster binary
    pub fn init_roster() -> &'static ComponentId {
        COMPONENT_ID.get_or_init(|| ComponentId::Roster)
    }

    /// Initialize the global component ID for the load generator
    pub fn init_loadgen() -> &'static ComponentId {
        COMPONENT_ID.get_or_init(|| ComponentId::LoadGen)
    }

    /// Get the global component ID, falling back to `Embedded` when no
    /// binary has claimed it
    pub fn current() -> &'static ComponentId {
        COMPONENT_ID.get_or_init(|| ComponentId::Embedded)
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentId::Roster => write!(f, "roster"),
            ComponentId::LoadGen => write!(f, "loadgen"),
            ComponentId::Embedded => write!(f, "embedded"),
        }
    }
}

/// Main language of a programmer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    C,
    CSharp,
    CPlusPlus,
    Java,
    Python,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::C,
        Language::CSharp,
        Language::CPlusPlus,
        Language::Java,
        Language::Python,
    ];

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "c" => Some(Language::C),
            "csharp" | "c#" => Some(Language::CSharp),
            "cplusplus" | "cpp" | "c++" => Some(Language::CPlusPlus),
            "java" => Some(Language::Java),
            "python" => Some(Language::Python),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::C => "C",
            Language::CSharp => "C#",
            Language::CPlusPlus => "C++",
            Language::Java => "Java",
            Language::Python => "Python",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
