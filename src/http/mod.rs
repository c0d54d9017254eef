//! HTTP client layer: `LoopringHttp` and its session lifecycle.

pub mod client;

pub use client::{LoopringHttp, API_KEY_HEADER, DEFAULT_TIMEOUT};
