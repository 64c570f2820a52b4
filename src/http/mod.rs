//! Low-level HTTP plumbing shared by both provider adapters.

mod client;
pub mod retry;

pub use client::HttpClient;
