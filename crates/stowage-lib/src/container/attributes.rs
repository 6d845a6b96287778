//! Fixed physical attributes shared by every container kind.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Physical dimensions and the declared load capacity, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerSpec {
    pub height_cm: f64,
    pub tare_kg: f64,
    pub depth_cm: f64,
    pub capacity_kg: f64,
}

impl ContainerSpec {
    /// Validate the physical attributes for correctness.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            (self.height_cm, "height_cm"),
            (self.tare_kg, "tare_kg"),
            (self.depth_cm, "depth_cm"),
            (self.capacity_kg, "capacity_kg"),
        ];

        for (value, field) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::Validation {
                    message: format!("{field} must be a finite positive number"),
                });
            }
        }

        Ok(())
    }
}
