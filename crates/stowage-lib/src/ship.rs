//! Container ships: exclusive ownership, capacity enforcement, and fleet
//! operations.
//!
//! A [`Ship`] owns its containers outright; boarding moves a container onto
//! the ship and removal hands it back. Operations that refuse a container
//! (slot limit, weight limit, unknown serial) return it to the caller inside
//! [`RejectedContainer`] rather than dropping it, in the manner of
//! `std::sync::mpsc::SendError`.

use tracing::debug;

use crate::container::Container;
use crate::error::{Error, Result};
use crate::serial::SerialNumber;

/// A refused boarding attempt; hands the container back to the caller.
#[derive(Debug, thiserror::Error)]
#[error("{reason}")]
pub struct RejectedContainer {
    pub container: Container,
    pub reason: Error,
}

impl From<RejectedContainer> for Error {
    fn from(rejected: RejectedContainer) -> Self {
        rejected.reason
    }
}

/// A refused bulk boarding: the rejected container plus everything that was
/// not attempted. Containers boarded before the refusal stay boarded.
#[derive(Debug, thiserror::Error)]
#[error("{rejected}")]
pub struct RejectedBatch {
    pub rejected: RejectedContainer,
    pub remaining: Vec<Container>,
}

impl From<RejectedBatch> for Error {
    fn from(batch: RejectedBatch) -> Self {
        batch.rejected.reason
    }
}

/// A container ship with an ordered collection of owned containers.
#[derive(Debug, PartialEq)]
pub struct Ship {
    name: String,
    containers: Vec<Container>,
    max_speed_knots: f64,
    max_containers: usize,
    max_weight_tons: f64,
}

impl Ship {
    /// Build an empty ship, validating its operating limits.
    pub fn new(
        name: impl Into<String>,
        max_speed_knots: f64,
        max_containers: usize,
        max_weight_tons: f64,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::Validation {
                message: "ship name must not be empty".to_string(),
            });
        }
        for (value, field) in [
            (max_speed_knots, "max_speed_knots"),
            (max_weight_tons, "max_weight_tons"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::Validation {
                    message: format!("{field} must be a finite positive number"),
                });
            }
        }
        if max_containers == 0 {
            return Err(Error::Validation {
                message: "max_containers must be at least 1".to_string(),
            });
        }

        Ok(Self {
            name,
            containers: Vec::new(),
            max_speed_knots,
            max_containers,
            max_weight_tons,
        })
    }

    /// The ship's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Maximum speed in knots.
    pub fn max_speed_knots(&self) -> f64 {
        self.max_speed_knots
    }

    /// Number of container slots.
    pub fn max_containers(&self) -> usize {
        self.max_containers
    }

    /// Weight limit in tons.
    pub fn max_weight_tons(&self) -> f64 {
        self.max_weight_tons
    }

    /// Weight limit in kilograms; all weight arithmetic happens in kg.
    pub fn max_weight_kg(&self) -> f64 {
        self.max_weight_tons * 1000.0
    }

    /// The containers on board, in stowage order.
    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    /// Number of containers on board.
    pub fn container_count(&self) -> usize {
        self.containers.len()
    }

    /// Combined tare and cargo weight of everything on board, in kilograms.
    pub fn total_weight_kg(&self) -> f64 {
        self.containers.iter().map(Container::total_weight_kg).sum()
    }

    /// Look up a container by serial.
    pub fn container(&self, serial: &SerialNumber) -> Option<&Container> {
        self.position(serial).map(|index| &self.containers[index])
    }

    fn position(&self, serial: &SerialNumber) -> Option<usize> {
        self.containers
            .iter()
            .position(|container| container.serial() == serial)
    }

    /// Slot and weight admission checks shared by every boarding path.
    fn admission_check(&self, container: &Container) -> Result<()> {
        if self.containers.len() >= self.max_containers {
            return Err(Error::Full {
                ship: self.name.clone(),
                limit: self.max_containers,
            });
        }

        let attempted_kg = self.total_weight_kg() + container.total_weight_kg();
        let limit_kg = self.max_weight_kg();
        if attempted_kg > limit_kg {
            return Err(Error::CapacityExceeded {
                subject: format!("ship {}", self.name),
                attempted_kg,
                limit_kg,
            });
        }

        Ok(())
    }

    /// Board a container, appending it to the stowage order.
    pub fn add_container(
        &mut self,
        container: Container,
    ) -> std::result::Result<(), RejectedContainer> {
        if let Err(reason) = self.admission_check(&container) {
            return Err(RejectedContainer { container, reason });
        }

        debug!(ship = %self.name, serial = %container.serial(), "container boarded");
        self.containers.push(container);
        Ok(())
    }

    /// Board a batch of containers sequentially.
    ///
    /// Not atomic: the first refusal stops the run, and containers boarded
    /// before it stay boarded.
    pub fn add_containers(
        &mut self,
        batch: Vec<Container>,
    ) -> std::result::Result<(), RejectedBatch> {
        let mut pending = batch.into_iter();
        while let Some(container) = pending.next() {
            if let Err(rejected) = self.add_container(container) {
                return Err(RejectedBatch {
                    rejected,
                    remaining: pending.collect(),
                });
            }
        }
        Ok(())
    }

    /// Remove a container by serial, returning ownership to the caller.
    pub fn remove_container(&mut self, serial: &SerialNumber) -> Result<Container> {
        let index = self.position(serial).ok_or_else(|| Error::NotFound {
            serial: serial.clone(),
        })?;
        debug!(ship = %self.name, %serial, "container removed");
        Ok(self.containers.remove(index))
    }

    /// Unload the cargo of the container with the given serial, applying its
    /// kind's discharge rules.
    pub fn unload_container(&mut self, serial: &SerialNumber) -> Result<()> {
        let index = self.position(serial).ok_or_else(|| Error::NotFound {
            serial: serial.clone(),
        })?;
        self.containers[index].unload();
        Ok(())
    }

    /// Swap the container with the given serial for `replacement`, keeping
    /// its position in the stowage order.
    ///
    /// All-or-nothing: if the replacement is refused, the original container
    /// is reinstated at its index and the refusal is returned with the
    /// replacement handed back. On success the displaced container is
    /// returned to the caller.
    pub fn replace_container(
        &mut self,
        serial: &SerialNumber,
        replacement: Container,
    ) -> std::result::Result<Container, RejectedContainer> {
        let Some(index) = self.position(serial) else {
            return Err(RejectedContainer {
                container: replacement,
                reason: Error::NotFound {
                    serial: serial.clone(),
                },
            });
        };

        let displaced = self.containers.remove(index);
        if let Err(reason) = self.admission_check(&replacement) {
            self.containers.insert(index, displaced);
            return Err(RejectedContainer {
                container: replacement,
                reason,
            });
        }

        debug!(
            ship = %self.name,
            displaced = %displaced.serial(),
            replacement = %replacement.serial(),
            "container replaced"
        );
        self.containers.insert(index, replacement);
        Ok(displaced)
    }

    /// Move the container with the given serial from `source` to `target`.
    ///
    /// The container is owned by exactly one ship at every observable point:
    /// it is taken off the source first and reinstated at its original index
    /// if the target refuses it. A refusal is reported as a transfer failure
    /// wrapping the cause message; a missing serial is reported directly.
    pub fn transfer_container(
        source: &mut Ship,
        target: &mut Ship,
        serial: &SerialNumber,
    ) -> Result<()> {
        let index = source.position(serial).ok_or_else(|| Error::NotFound {
            serial: serial.clone(),
        })?;

        let container = source.containers.remove(index);
        match target.add_container(container) {
            Ok(()) => {
                debug!(from = %source.name, to = %target.name, %serial, "container transferred");
                Ok(())
            }
            Err(rejected) => {
                source.containers.insert(index, rejected.container);
                Err(Error::TransferFailed {
                    serial: serial.clone(),
                    cause: rejected.reason.to_string(),
                })
            }
        }
    }
}
