//! SQLite storage implementation

use std::path::Path;
use rusqlite::{Connection, params, OptionalExtension};
use crate::Result;
use crate::snippet::{SearchHit, Snippet};
use super::schema;

/// SQLite-backed storage for snippets.
///
/// The store owns its connection: build one at startup with [`SnippetStore::open`]
/// and drop it at shutdown.
pub struct SnippetStore {
    conn: Connection,
}

impl SnippetStore {
    /// Open a database file, creating it and any missing parent directories
    pub fn open(path: &Path) -> Result<Self> {
        tracing::debug!("Opening snippet database {}", path.display());
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        let store = Self::from_connection(conn)?;
        tracing::debug!("Database connection established");
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    /// Wrap an existing connection, creating the schema if missing
    pub fn from_connection(conn: Connection) -> Result<Self> {
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize connection settings and the database schema
    fn initialize_schema(&self) -> Result<()> {
        for pragma in schema::CONNECTION_PRAGMAS {
            self.conn.execute_batch(pragma)?;
        }
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    // ========== Snippet Operations ==========

    /// Store a snippet under `keyword`, overwriting message and visibility
    /// of an existing one.
    pub fn put(&self, keyword: &str, message: &str, hidden: bool) -> Result<Snippet> {
        tracing::info!("Storing snippet {:?}: {:?} (hidden: {})", keyword, message, hidden);
        self.conn.execute(
            r#"
            INSERT INTO snippets (keyword, message, hidden)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(keyword) DO UPDATE SET
                message = excluded.message,
                hidden = excluded.hidden
            "#,
            params![keyword, message, hidden],
        )?;
        tracing::debug!("Snippet stored successfully");

        Ok(Snippet::new(keyword, message, hidden))
    }

    /// Retrieve the message stored under `keyword`, hidden or not.
    /// Returns `None` when no snippet has that exact keyword.
    pub fn get(&self, keyword: &str) -> Result<Option<String>> {
        tracing::info!("Retrieving snippet {:?}", keyword);
        self.conn
            .query_row(
                "SELECT message FROM snippets WHERE keyword = ?1",
                [keyword],
                |row| row.get(0),
            )
            .optional()
            .map_err(Into::into)
    }

    /// Retrieve a full snippet row, including its hidden flag
    pub fn get_snippet(&self, keyword: &str) -> Result<Option<Snippet>> {
        self.conn
            .query_row(
                "SELECT keyword, message, hidden FROM snippets WHERE keyword = ?1",
                [keyword],
                |row| Self::row_to_snippet(row),
            )
            .optional()
            .map_err(Into::into)
    }

    /// List all visible keywords in ascending order
    pub fn catalog(&self) -> Result<Vec<String>> {
        tracing::info!("Listing snippet catalog");
        let mut stmt = self.conn.prepare(
            "SELECT keyword FROM snippets WHERE NOT hidden ORDER BY keyword ASC"
        )?;

        let keywords = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;

        Ok(keywords)
    }

    /// Find visible snippets whose keyword or message contains `term`.
    ///
    /// `term` is matched literally: LIKE wildcards in it are escaped.
    pub fn search(&self, term: &str) -> Result<Vec<SearchHit>> {
        tracing::info!("Searching snippets for {:?}", term);
        let pattern = format!("%{}%", escape_like(term));

        let mut stmt = self.conn.prepare(
            r#"
            SELECT keyword, message
            FROM snippets
            WHERE (keyword LIKE ?1 ESCAPE '\' OR message LIKE ?1 ESCAPE '\')
              AND NOT hidden
            GROUP BY keyword
            ORDER BY keyword ASC
            "#,
        )?;

        let hits = stmt
            .query_map([&pattern], |row| {
                Ok(SearchHit {
                    keyword: row.get(0)?,
                    message: row.get(1)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        tracing::debug!("Search for {:?} matched {} snippets", term, hits.len());
        Ok(hits)
    }

    /// Count stored snippets
    pub fn counts(&self) -> Result<StoreCounts> {
        let (total, hidden): (i64, i64) = self.conn.query_row(
            "SELECT COUNT(*), COALESCE(SUM(hidden), 0) FROM snippets",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        Ok(StoreCounts {
            total: total as usize,
            hidden: hidden as usize,
        })
    }

    /// Helper to convert a row to a Snippet
    fn row_to_snippet(row: &rusqlite::Row) -> rusqlite::Result<Snippet> {
        Ok(Snippet {
            keyword: row.get(0)?,
            message: row.get(1)?,
            hidden: row.get(2)?,
        })
    }
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Snippet counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct StoreCounts {
    pub total: usize,
    pub hidden: usize,
}

impl std::fmt::Display for StoreCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} snippets ({} hidden)", self.total, self.hidden)
    }
}
