use std::collections::HashMap;

/// Maps variable names to their current values for the duration of one run.
///
/// Names are case sensitive. Entries are never removed.
#[derive(Debug, Default)]
pub struct SymbolTable {
    values: HashMap<String, f64>,
}

impl SymbolTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of `name`.
    ///
    /// A name that was never assigned reads as `0`, and the read creates the
    /// entry.
    ///
    /// # Example
    /// ```
    /// use calc_interp::interpreter::symbols::SymbolTable;
    ///
    /// let mut symbols = SymbolTable::new();
    /// assert!(!symbols.contains("x"));
    /// assert_eq!(symbols.get("x"), 0.0);
    /// assert!(symbols.contains("x"));
    ///
    /// symbols.set("x", 2.5);
    /// assert_eq!(symbols.get("x"), 2.5);
    /// ```
    pub fn get(&mut self, name: &str) -> f64 {
        *self.values.entry(name.to_string()).or_insert(0.0)
    }

    /// Stores `value` under `name`, replacing any previous value.
    pub fn set(&mut self, name: &str, value: f64) {
        self.values.insert(name.to_string(), value);
    }

    /// Returns the value of `name` without creating an entry for it.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Returns `true` if `name` has been assigned or read before.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }
}
