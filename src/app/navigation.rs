//! Screen routing
//!
//! The favorites screen only knows the `Navigator` seam: a destination name
//! and the full selected record. `ScreenStack` is the in-app collaborator
//! behind that seam.

use crate::types::DoaRecord;
use tracing::warn;

/// Destination name for the detail view.
pub const DETAIL_DOA: &str = "DetailDoa";

/// Routing collaborator. Receives the entire selected record so the detail
/// view never needs a second fetch.
pub trait Navigator {
    fn navigate(&mut self, destination: &str, doa: DoaRecord);
}

#[derive(Clone, Debug, PartialEq)]
pub enum Screen {
    Favorites,
    DetailDoa(DoaRecord),
}

/// Non-empty stack of screens; the favorites list is always at the bottom.
pub struct ScreenStack {
    stack: Vec<Screen>,
}

impl ScreenStack {
    pub fn new() -> Self {
        Self {
            stack: vec![Screen::Favorites],
        }
    }

    pub fn current(&self) -> &Screen {
        self.stack.last().expect("screen stack is never empty")
    }

    /// Back navigation; the root screen stays put.
    pub fn pop(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }
}

impl Default for ScreenStack {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for ScreenStack {
    fn navigate(&mut self, destination: &str, doa: DoaRecord) {
        match destination {
            DETAIL_DOA => self.stack.push(Screen::DetailDoa(doa)),
            other => warn!(destination = other, "Unknown navigation destination"),
        }
    }
}
