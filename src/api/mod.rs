pub mod client;
pub mod stats;
pub mod users;
pub mod words;

pub use client::ApiClient;
