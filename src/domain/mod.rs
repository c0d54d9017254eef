//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: typed response objects
//! - `wire.rs`: request bodies and raw wire shapes
//! - `convert.rs`: `TryFrom`/`From` conversions with validation
//! - `client.rs`: sub-client with the HTTP methods
//!
//! [`payload`] holds the complete/incomplete wrapper every response goes through.

pub mod order;
pub mod orderbook;
pub mod payload;
pub mod relayer;
