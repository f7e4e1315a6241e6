use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The declaration a [`super::Database`] is built from.
///
/// The column list is advisory. Declared columns are indexed from the start,
/// while any other column named by an insert gets indexed on first use.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDefinition {
    pub name: String,
    #[serde(default)]
    pub columns: Vec<String>,
}

impl TableDefinition {
    pub fn new(name: &str) -> TableDefinition {
        TableDefinition {
            name: name.to_string(),
            columns: vec![],
        }
    }

    pub fn with_columns(name: &str, columns: &[&str]) -> TableDefinition {
        TableDefinition {
            name: name.to_string(),
            columns: columns.iter().map(|column| column.to_string()).collect(),
        }
    }
}

impl Display for TableDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.columns.join(", "))
    }
}
