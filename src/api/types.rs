//! Shared state for the intake router.

use std::path::PathBuf;
use std::sync::Arc;

use rusqlite::Connection;

use crate::db::{self, DatabaseError};

/// Shared context for all routes. Holds the database path; each request
/// opens its own connection and drops it when the handler returns, so
/// there is nothing to coordinate across requests.
#[derive(Clone)]
pub struct ApiContext {
    db_path: Arc<PathBuf>,
}

impl ApiContext {
    pub fn new(db_path: PathBuf) -> Self {
        Self {
            db_path: Arc::new(db_path),
        }
    }

    /// Open a connection scoped to the current request.
    pub fn open_db(&self) -> Result<Connection, DatabaseError> {
        db::open_database(&self.db_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_db_creates_schema() {
        let tmp = tempfile::tempdir().unwrap();
        let ctx = ApiContext::new(tmp.path().join("patients.db"));
        let conn = ctx.open_db().unwrap();
        assert!(crate::db::table_exists(&conn, "patients").unwrap());
    }

    #[test]
    fn context_is_cheaply_cloneable() {
        let ctx = ApiContext::new(PathBuf::from("patients.db"));
        let clone = ctx.clone();
        assert_eq!(*ctx.db_path, *clone.db_path);
    }
}
