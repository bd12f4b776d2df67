//! HTTP plumbing shared by the API gateway.

mod client;

pub use client::{HttpClient, HttpClientBuilder};
