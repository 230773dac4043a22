pub mod controller;
pub mod store;

pub use controller::{ConversationController, TurnOutcome};
pub use store::{MemorySessionStore, SessionStore};
