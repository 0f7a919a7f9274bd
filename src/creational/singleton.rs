//! Singleton: one database handle for the whole process.

use std::sync::{Mutex, PoisonError};

use lazy_static::lazy_static;
use tracing::info;
use uuid::Uuid;

lazy_static! {
    static ref INSTANCE: Database = Database::connect();
}

#[derive(Debug)]
pub struct Database {
    connection_id: Uuid,
    executed: Mutex<Vec<String>>,
}

impl Database {
    fn connect() -> Self {
        let connection_id = Uuid::new_v4();
        info!(%connection_id, "database connection opened");
        Self {
            connection_id,
            executed: Mutex::new(Vec::new()),
        }
    }

    /// The shared instance, created on first use.
    pub fn instance() -> &'static Database {
        &INSTANCE
    }

    pub fn connection_id(&self) -> Uuid {
        self.connection_id
    }

    pub fn query(&self, sql: &str) -> String {
        // A panic while holding the lock leaves the list intact, so keep using it.
        let mut executed = self.executed.lock().unwrap_or_else(PoisonError::into_inner);
        executed.push(sql.to_string());
        format!("[{}] executed #{}: {sql}", self.connection_id, executed.len())
    }

    pub fn executed_queries(&self) -> Vec<String> {
        self.executed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

pub fn demo() -> Vec<String> {
    let first = Database::instance();
    let second = Database::instance();

    vec![
        first.query("SELECT * FROM table1"),
        second.query("SELECT * FROM table2"),
        format!("same instance: {}", std::ptr::eq(first, second)),
    ]
}
