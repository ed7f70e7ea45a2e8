//! # Custody Columns Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/
//! │   └── custody_benchmarks.rs   # Assignment and search throughput
//! └── src/
//!     └── integration/            # Flows across das-custody and shared-crypto
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p custody-tests
//! cargo bench -p custody-tests
//! ```

pub mod integration;
