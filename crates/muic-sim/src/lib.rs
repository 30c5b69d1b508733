//! MUIC Simulation Library
//!
//! This crate provides a simulation layer for testing accessory
//! detection without a physical MUIC chip. It includes:
//!
//! - **VirtualMuic**: a simulated chip that queues status snapshots and
//!   records every control write for assertion
//! - **snapshots**: preset status snapshots for common accessories
//!
//! # Example
//!
//! ```rust
//! use muic_sim::{snapshots, VirtualMuic};
//! use muic_engine::SnapshotSource;
//!
//! let mut chip = VirtualMuic::new();
//!
//! // Seat a dedicated charger and read the resulting snapshot
//! chip.plug(snapshots::dedicated_charger());
//! let snapshot = chip.read_snapshot().unwrap();
//! assert!(snapshot.vbus_high);
//! ```

pub mod chip;
pub mod snapshots;

pub use chip::{ControlOp, VirtualMuic};
