//! Search filter predicate construction.
//!
//! Turns a set of optional substring filters into a parameterized SQL
//! fragment so the builder stays testable without a live database.

use cmdbook_types::{StoreError, StoreResult};

/// Optional substring criteria for a command search. An empty string means
/// the field imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    pub command: String,
    pub alias: String,
    pub tag: String,
}

impl SearchFilters {
    pub fn is_empty(&self) -> bool {
        self.command.is_empty() && self.alias.is_empty() && self.tag.is_empty()
    }

    pub fn command(value: impl Into<String>) -> Self {
        SearchFilters {
            command: value.into(),
            ..Default::default()
        }
    }

    pub fn alias(value: impl Into<String>) -> Self {
        SearchFilters {
            alias: value.into(),
            ..Default::default()
        }
    }

    pub fn tag(value: impl Into<String>) -> Self {
        SearchFilters {
            tag: value.into(),
            ..Default::default()
        }
    }
}

/// Conjunction of `LIKE '%value%'` clauses over the non-empty filters,
/// rendered as a WHERE fragment plus its bound parameters. User input only
/// ever appears in the parameter list, never in the SQL text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    clause: String,
    params: Vec<String>,
}

impl Predicate {
    pub fn build(filters: &SearchFilters) -> StoreResult<Predicate> {
        if filters.is_empty() {
            return Err(StoreError::InvalidFilters);
        }

        let mut clauses = Vec::new();
        let mut params = Vec::new();
        for (column, value) in [
            ("command", &filters.command),
            ("alias", &filters.alias),
            ("tags", &filters.tag),
        ] {
            if value.is_empty() {
                continue;
            }
            params.push(format!("%{}%", escape_like(value)));
            clauses.push(format!("{column} LIKE ?{} ESCAPE '\\'", params.len()));
        }

        Ok(Predicate {
            clause: clauses.join(" AND "),
            params,
        })
    }

    /// The WHERE fragment, without the `WHERE` keyword.
    pub fn clause(&self) -> &str {
        &self.clause
    }

    /// Bound parameter values, in `?N` order.
    pub fn params(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(String::as_str)
    }
}

/// Escape LIKE wildcards so filter text matches literally.
fn escape_like(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
