use std::sync::atomic::{AtomicU32, Ordering};

/// Counts tests started by this process.
static NEXT_TEST: AtomicU32 = AtomicU32::new(0);

/// A table name prefix unique to one test: `jsf_{process id}_{test number}_`.
///
/// Tests sharing a database, within or across processes, never touch each
/// other's tables.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Only used when database features are enabled
pub struct TestIsolation {
    prefix: String,
}

#[allow(dead_code)] // Only used when database features are enabled
impl TestIsolation {
    pub fn new() -> Self {
        let test = NEXT_TEST.fetch_add(1, Ordering::Relaxed);

        Self {
            prefix: format!("jsf_{}_{test}_", std::process::id()),
        }
    }

    pub fn table_prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns `true` if the table was created by this test.
    pub fn owns_table(&self, table_name: &str) -> bool {
        table_name.starts_with(&self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_are_unique() {
        let a = TestIsolation::new();
        let b = TestIsolation::new();

        assert_ne!(a.table_prefix(), b.table_prefix());
        assert!(a.table_prefix().starts_with("jsf_"));
        assert!(a.table_prefix().ends_with('_'));
    }

    #[test]
    fn owns_only_its_tables() {
        let isolation = TestIsolation::new();
        let table = format!("{}document", isolation.table_prefix());

        assert!(isolation.owns_table(&table));
        assert!(!TestIsolation::new().owns_table(&table));
    }
}
