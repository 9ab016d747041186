//! Core types for persona-chat
//!
//! This crate contains domain types shared across all other crates.

mod chat;
mod constants;
mod env_config;
mod persona;
mod session;
mod trait_import;
mod user;

pub use chat::*;
pub use constants::*;
pub use env_config::*;
pub use persona::*;
pub use session::*;
pub use trait_import::*;
pub use user::*;
