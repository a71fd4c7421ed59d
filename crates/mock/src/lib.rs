//! SQLite-backed substitute backend
//!
//! [`SqliteData`] stands in for the real remote attribute store when
//! tests (or offline tools) need one without a network. Each
//! collection becomes one relational table: key attributes are text
//! primary-key columns, every other attribute a free-form text
//! column, and conditions translate to a parameterized `WHERE`
//! clause. Only equality predicates are translatable.
//!
//! Every value is persisted in its canonical text form and read back
//! as a string attribute; richer typing does not survive the round
//! trip. See `AttrValue::text`.

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::path::{Path, PathBuf};

use rusqlite::{params_from_iter, Connection};
use tempfile::NamedTempFile;
use tracing::debug;

use dripdb_core::{Attributes, Backend, Conditions, Error, Operator, Result};

/// Substitute backend storing collections in a SQLite file.
///
/// The instance owns the database file path; no ambient global
/// handle exists. Every operation opens a fresh connection and drops
/// it on return, so callers must not assume connection reuse across
/// calls. The file itself may be shared by several instances.
pub struct SqliteData {
    path: PathBuf,
    // Keeps a temp-file backing store alive for the instance's lifetime.
    _guard: Option<NamedTempFile>,
}

impl SqliteData {
    /// Back the store with the given database file, created on first
    /// use if absent.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _guard: None,
        }
    }

    /// Back the store with a fresh temporary file, removed when this
    /// instance is dropped.
    pub fn temporary() -> Result<Self> {
        let file = NamedTempFile::new().map_err(Error::storage)?;
        Ok(Self {
            path: file.path().to_path_buf(),
            _guard: Some(file),
        })
    }

    /// The database file this instance writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Fluent variant of [`Backend::create_collection`] for chaining
    /// at construction time:
    ///
    /// ```ignore
    /// let data = SqliteData::temporary()?
    ///     .with_collection("users", &["id"], &["name"])?;
    /// ```
    pub fn with_collection(self, name: &str, keys: &[&str], attrs: &[&str]) -> Result<Self> {
        self.create_collection(name, keys, attrs)?;
        Ok(self)
    }

    fn connect(&self) -> Result<Connection> {
        Connection::open(&self.path).map_err(Error::storage)
    }
}

impl Backend for SqliteData {
    fn create_collection(&self, name: &str, keys: &[&str], attrs: &[&str]) -> Result<()> {
        if keys.is_empty() {
            return Err(Error::InvalidSchema(name.to_string()));
        }
        let mut columns: Vec<String> = keys
            .iter()
            .map(|k| format!("{} TEXT NOT NULL", ident(k)))
            .collect();
        columns.extend(attrs.iter().map(|a| format!("{} TEXT", ident(a))));
        columns.push(format!(
            "PRIMARY KEY ({})",
            keys.iter().map(|k| ident(k)).collect::<Vec<_>>().join(", ")
        ));
        let sql = format!("CREATE TABLE {} ({})", ident(name), columns.join(", "));
        debug!(collection = name, keys = keys.len(), attrs = attrs.len(), "creating collection");

        self.connect()?.execute(&sql, []).map_err(Error::storage)?;
        Ok(())
    }

    fn put(&self, name: &str, record: &Attributes) -> Result<()> {
        let columns: Vec<String> = record.keys().map(ident).collect();
        let placeholders = vec!["?"; record.len()].join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            ident(name),
            columns.join(", "),
            placeholders
        );
        let values: Vec<String> = record.iter().map(|(_, v)| v.text()).collect();
        debug!(collection = name, attrs = record.len(), "inserting record");

        self.connect()?
            .execute(&sql, params_from_iter(values.iter()))
            .map_err(Error::storage)?;
        Ok(())
    }

    fn iterate(&self, name: &str, conditions: &Conditions) -> Result<Vec<Attributes>> {
        let (clause, binds) = where_clause(conditions)?;
        let mut sql = format!("SELECT * FROM {}", ident(name));
        if !clause.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clause);
        }

        let conn = self.connect()?;
        let mut stmt = conn.prepare(&sql).map_err(Error::storage)?;
        let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();

        let mut records = Vec::new();
        let mut rows = stmt
            .query(params_from_iter(binds.iter()))
            .map_err(Error::storage)?;
        while let Some(row) = rows.next().map_err(Error::storage)? {
            let mut record = Attributes::new();
            for (idx, column) in columns.iter().enumerate() {
                // NULL means the row was stored without this attribute.
                let value: Option<String> = row.get(idx).map_err(Error::storage)?;
                if let Some(text) = value {
                    record = record.with(column.clone(), text);
                }
            }
            records.push(record);
        }
        debug!(
            collection = name,
            predicates = conditions.len(),
            rows = records.len(),
            "scanned collection"
        );
        Ok(records)
    }
}

/// Translate a condition set into a parameterized SQL filter.
///
/// Emits `"name" = ?` per predicate joined by `AND`, with the bound
/// texts in iteration order. An empty set produces an empty clause
/// (full scan). Anything other than single-operand equality is an
/// [`Error::UnsupportedPredicate`].
fn where_clause(conditions: &Conditions) -> Result<(String, Vec<String>)> {
    let mut terms = Vec::with_capacity(conditions.len());
    let mut binds = Vec::with_capacity(conditions.len());
    for (name, condition) in conditions.iter() {
        if condition.operands.len() != 1 {
            return Err(Error::unsupported(
                name,
                format!(
                    "exactly one operand is supported, got {}",
                    condition.operands.len()
                ),
            ));
        }
        if condition.operator != Operator::Eq {
            return Err(Error::unsupported(
                name,
                format!("only the EQ operator is supported, got {}", condition.operator),
            ));
        }
        terms.push(format!("{} = ?", ident(name)));
        binds.push(condition.operands[0].text());
    }
    Ok((terms.join(" AND "), binds))
}

/// Double-quote an identifier so arbitrary attribute names cannot
/// break out of a statement. Values are always bound, never inlined.
fn ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
