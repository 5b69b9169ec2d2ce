//! Compute-once storage for configuration fields.

use std::cell::OnceCell;
use std::fmt;

use crate::error::Result;

/// A lazily computed, write-once value.
///
/// The field is either not yet computed or holds its computed value. Fields
/// that may legitimately be absent use `Cached<Option<T>>`, so a computed
/// `None` is distinct from "not computed". A failed computation stores
/// nothing.
pub struct Cached<T> {
    cell: OnceCell<T>,
}

impl<T> Cached<T> {
    /// Create an empty field.
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Create a field that is already computed.
    pub fn with_value(value: T) -> Self {
        Self {
            cell: OnceCell::from(value),
        }
    }

    /// The computed value, if any.
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    /// Whether the value has been computed.
    pub fn is_set(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Return the value, computing it with `init` on first use.
    pub fn get_or_init<F>(&self, init: F) -> &T
    where
        F: FnOnce() -> T,
    {
        self.cell.get_or_init(init)
    }

    /// Return the value, computing it with `init` on first use.
    ///
    /// An error from `init` is returned as-is and leaves the field unset.
    pub fn get_or_try_init<F>(&self, init: F) -> Result<&T>
    where
        F: FnOnce() -> Result<T>,
    {
        if let Some(value) = self.cell.get() {
            return Ok(value);
        }
        let value = init()?;
        Ok(self.cell.get_or_init(|| value))
    }
}

impl<T> Default for Cached<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Cached<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cell.get() {
            Some(value) => f.debug_tuple("Cached").field(value).finish(),
            None => f.write_str("Cached(<unset>)"),
        }
    }
}
