//! Listener layer: listener traits and the filtering adapter.

mod filtering;
mod listener_trait;

pub use filtering::{FilteringListener, SharedStrategy};
pub use listener_trait::{BatchMessageListener, MessageListener};
