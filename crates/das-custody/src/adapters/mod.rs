//! # Adapters Layer
//!
//! Concrete implementations of the outbound `NodeIdSource` port.

pub mod random_source;
pub mod secp256k1_source;

pub use random_source::RandomNodeIdSource;
pub use secp256k1_source::Secp256k1NodeIdSource;
