//! HTTP transport shared by remote API clients

pub mod client;

pub use client::{HttpClient, HttpClientBuilder};
