//! Storage backend trait abstraction
//!
//! Defines async domain traits for storage operations so the service
//! layer can be exercised against fakes in tests.

pub mod chat;
pub mod persona;
pub mod user;

pub use chat::ChatStore;
pub use persona::TraitStore;
pub use user::UserStore;
