//! Container types, loading rules, and the hazard-alert capability.
//!
//! This module is organized into focused submodules:
//!
//! - [`attributes`] - fixed physical attributes and their validation
//! - [`kind`] - the specialized variants (liquid, gas, refrigerated)
//! - [`products`] - required storage temperatures for refrigerated cargo
//!
//! # Example
//!
//! ```
//! use stowage_lib::{Container, ContainerKind, ContainerSpec, SerialAllocator};
//!
//! let serials = SerialAllocator::new();
//! let mut tank = Container::new(
//!     &serials,
//!     ContainerSpec { height_cm: 200.0, tare_kg: 500.0, depth_cm: 100.0, capacity_kg: 2000.0 },
//!     ContainerKind::Liquid { hazardous: false },
//! )
//! .unwrap();
//!
//! tank.load(1500.0, "Milk").unwrap();
//! assert_eq!(tank.total_weight_kg(), 2000.0);
//! ```

pub mod attributes;
pub mod kind;
pub mod products;

use std::fmt;

use tracing::warn;

use crate::error::{Error, Result};
use crate::manifest::ContainerSummary;
use crate::serial::{SerialAllocator, SerialNumber};

pub use attributes::ContainerSpec;
pub use kind::{ContainerKind, HazardClass};

/// Fraction of cargo a gas container retains after unloading.
pub const GAS_RESIDUAL_FRACTION: f64 = 0.05;

/// Fill limits applied to liquid cargo, as fractions of declared capacity.
const HAZARDOUS_LIQUID_FILL: f64 = 0.5;
const STANDARD_LIQUID_FILL: f64 = 0.9;

/// A cargo container with a unique serial number and kind-specific loading
/// rules.
#[derive(Debug, PartialEq)]
pub struct Container {
    serial: SerialNumber,
    spec: ContainerSpec,
    kind: ContainerKind,
    cargo_kg: f64,
    product: Option<String>,
}

impl Container {
    /// Build an empty container, drawing the next serial number from
    /// `serials`. The physical attributes are validated up front and fixed
    /// for the container's lifetime.
    pub fn new(serials: &SerialAllocator, spec: ContainerSpec, kind: ContainerKind) -> Result<Self> {
        spec.validate()?;
        Ok(Self {
            serial: serials.allocate(kind.tag()),
            spec,
            kind,
            cargo_kg: 0.0,
            product: None,
        })
    }

    /// The container's unique serial number.
    pub fn serial(&self) -> &SerialNumber {
        &self.serial
    }

    /// The fixed physical attributes.
    pub fn spec(&self) -> ContainerSpec {
        self.spec
    }

    /// The container's specialization.
    pub fn kind(&self) -> ContainerKind {
        self.kind
    }

    /// Current cargo mass in kilograms.
    pub fn cargo_kg(&self) -> f64 {
        self.cargo_kg
    }

    /// Product recorded by the most recent load, if any.
    pub fn product(&self) -> Option<&str> {
        self.product.as_deref()
    }

    /// The kind-specific ceiling actually enforced on every load call.
    ///
    /// Hazardous liquids are held to 50% of the declared capacity and
    /// ordinary liquids to 90%; gas and refrigerated containers use the
    /// declared capacity as-is.
    pub fn effective_capacity_kg(&self) -> f64 {
        match self.kind {
            ContainerKind::Liquid { hazardous: true } => {
                self.spec.capacity_kg * HAZARDOUS_LIQUID_FILL
            }
            ContainerKind::Liquid { hazardous: false } => {
                self.spec.capacity_kg * STANDARD_LIQUID_FILL
            }
            ContainerKind::Gas { .. } | ContainerKind::Refrigerated { .. } => self.spec.capacity_kg,
        }
    }

    /// Capability check: only liquid and gas containers raise hazard alerts.
    pub fn hazard_class(&self) -> Option<HazardClass> {
        match self.kind {
            ContainerKind::Liquid { .. } => Some(HazardClass::Liquid),
            ContainerKind::Gas { .. } => Some(HazardClass::Gas),
            ContainerKind::Refrigerated { .. } => None,
        }
    }

    /// Load a consignment of `product`, replacing the current cargo quantity.
    ///
    /// Refrigerated containers first require the product to be known and the
    /// container temperature to meet the product's requirement (equality is
    /// sufficient). Admission then checks the cargo already on board plus the
    /// incoming mass against the kind's effective limit; a refused liquid or
    /// gas load raises a hazard alert before the error is returned. A loaded
    /// container only accepts its current product.
    pub fn load(&mut self, mass_kg: f64, product: &str) -> Result<()> {
        if !mass_kg.is_finite() || mass_kg < 0.0 {
            return Err(Error::Validation {
                message: format!("load mass must be finite and non-negative, got {mass_kg}"),
            });
        }

        if let ContainerKind::Refrigerated { temperature_c } = self.kind {
            let required = products::required_temperature(product).ok_or_else(|| {
                Error::UnknownProduct {
                    product: product.to_string(),
                }
            })?;
            if temperature_c < required {
                return Err(Error::InvalidState {
                    detail: format!(
                        "container {} is at {temperature_c}C, {product} requires at least {required}C",
                        self.serial
                    ),
                });
            }
        }

        let limit_kg = self.effective_capacity_kg();
        let attempted_kg = self.cargo_kg + mass_kg;
        if attempted_kg > limit_kg {
            self.raise_hazard_alert();
            return Err(Error::CapacityExceeded {
                subject: format!("container {}", self.serial),
                attempted_kg,
                limit_kg,
            });
        }

        if self.cargo_kg > 0.0 {
            if let Some(current) = self.product.as_deref() {
                if current != product {
                    return Err(Error::InvalidState {
                        detail: format!(
                            "container {} already holds {current}; unload it before loading {product}",
                            self.serial
                        ),
                    });
                }
            }
        }

        self.product = Some(product.to_string());
        self.cargo_kg = mass_kg;
        Ok(())
    }

    /// Discharge the cargo.
    ///
    /// Gas containers keep a residual fraction behind, modeling incomplete
    /// evacuation; every other kind empties completely. The recorded product
    /// is retained either way, so a gas residual blocks a different product
    /// until the residual itself is gone.
    pub fn unload(&mut self) {
        self.cargo_kg = match self.kind {
            ContainerKind::Gas { .. } => self.cargo_kg * GAS_RESIDUAL_FRACTION,
            _ => 0.0,
        };
    }

    /// Tare weight plus current cargo, in kilograms. Pure.
    pub fn total_weight_kg(&self) -> f64 {
        self.spec.tare_kg + self.cargo_kg
    }

    fn raise_hazard_alert(&self) {
        if let Some(class) = self.hazard_class() {
            warn!(
                serial = %self.serial,
                "hazardous operation attempted on {} container",
                class.label()
            );
        }
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ContainerSummary::from_container(self).render_line())
    }
}
