//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Pseudo-legal move generation
//! - `castling.rs` - Castling preconditions and execution
//! - `en_passant.rs` - En-passant window lifecycle and capture
//! - `promotion.rs` - Auto-promotion to queen
//! - `status.rs` - Check, checkmate, and stalemate detection
//! - `edge_cases.rs` - Pins, degraded inputs, and invariants
//! - `proptest.rs` - Property-based tests over random playouts

mod edge_cases;
mod status;
