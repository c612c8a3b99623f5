mod auth;
pub mod client;
mod departments;
mod employees;
mod leave_types;
mod leaves;
mod profile;
pub mod types;

pub use client::*;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
