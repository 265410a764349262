//! # State Module
//!
//! Shared state for the flow layer.
//!
//! Separate focused types instead of one grab-bag struct:
//! - [`CartState`]: mutex-guarded session cart, the only mutable state
//! - [`PosConfig`]: read-only after startup
//!
//! Session token/role/currency live in `kasir_api::SessionStore`, next
//! to the client that consumes them.

mod cart;
mod config;

pub use cart::CartState;
pub use config::PosConfig;
