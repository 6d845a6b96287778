//! Stowage library entry points.
//!
//! This crate models a small container fleet: specialized cargo containers
//! (liquid, gas, refrigerated) with per-kind loading rules, ships that own
//! and move them under slot and weight limits, and serializable reports.
//! Higher-level consumers (the CLI) should only depend on the types exported
//! here instead of reimplementing behavior.

#![deny(warnings)]

pub mod container;
pub mod error;
pub mod manifest;
pub mod serial;
pub mod ship;

pub use container::{Container, ContainerKind, ContainerSpec, HazardClass, GAS_RESIDUAL_FRACTION};
pub use error::{Error, Result};
pub use manifest::{describe_container, ContainerSummary, ShipManifest};
pub use serial::{KindTag, SerialAllocator, SerialNumber};
pub use ship::{RejectedBatch, RejectedContainer, Ship};
