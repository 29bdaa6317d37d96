//! Output units and their identities

use std::fmt;
use std::path::PathBuf;

/// Top-level schema category a unit belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Requests,
    Notifications,
    Structs,
    Enums,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Requests,
        Category::Notifications,
        Category::Structs,
        Category::Enums,
    ];

    /// Name of the namespace suffix and, for methods, of the outermost container
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Requests => "Requests",
            Category::Notifications => "Notifications",
            Category::Structs => "Structs",
            Category::Enums => "Enums",
        }
    }

    /// Full namespace of the category under `base`
    pub fn namespace(&self, base: &str) -> String {
        format!("{base}.{}", self.as_str())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of one unit: its category and schema method or type name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnitId {
    pub category: Category,
    pub name: String,
}

impl UnitId {
    pub fn new(category: Category, name: impl Into<String>) -> Self {
        Self {
            category,
            name: name.into(),
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.cs", self.name)
    }

    /// Path of the unit relative to the output directory
    pub fn relative_path(&self) -> PathBuf {
        PathBuf::from(self.category.as_str()).join(self.file_name())
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.category, self.name)
    }
}

/// An emitted unit
#[derive(Debug, Clone, PartialEq)]
pub struct OutputUnit {
    pub id: UnitId,
    pub source: String,
}

/// A unit that failed to compile
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub unit: UnitId,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.unit, self.message)
    }
}
