//! # Ports Module
//!
//! Hexagonal architecture ports.

pub mod inbound;
pub mod outbound;

pub use inbound::CustodyApi;
pub use outbound::{MockNodeIdSource, NodeIdSource};
