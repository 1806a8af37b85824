//! URL State Adapter
//!
//! The address bar is a derived view of [`ViewState`](crate::ViewState).
//! Writes always replace the current history entry.

mod memory;
mod projection;

pub use memory::MemoryLocation;
pub use projection::UrlProjection;

/// Read/write access to the address bar query string
pub trait UrlState {
    /// Current value of `name`, or `None` when absent.
    ///
    /// A parameter present with an empty value reads as `Some("")`.
    fn read(&self, name: &str) -> Option<String>;

    /// Set `name` to `value`, or remove it when `value` is `None`.
    ///
    /// Replaces the current history entry; never pushes a new one.
    fn write(&mut self, name: &str, value: Option<&str>);
}
