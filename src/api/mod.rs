//! API client for the catalog backend.

pub mod client;

pub use client::{MusicApi, MusicApiBuilder, DEFAULT_API_BASE};
