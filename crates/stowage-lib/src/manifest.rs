//! Serializable ship and container reports.
//!
//! The report types mirror the live domain objects at a point in time and
//! can be rendered as plain text or serialized by higher-level consumers.

use std::fmt::Write;

use serde::Serialize;

use crate::container::Container;
use crate::serial::SerialNumber;
use crate::ship::Ship;

/// One-line summary of a container's state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContainerSummary {
    pub serial: String,
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    pub cargo_kg: f64,
    pub total_weight_kg: f64,
}

impl ContainerSummary {
    /// Capture a container's current state.
    pub fn from_container(container: &Container) -> Self {
        Self {
            serial: container.serial().to_string(),
            kind: container.kind().label().to_string(),
            product: container.product().map(str::to_string),
            cargo_kg: container.cargo_kg(),
            total_weight_kg: container.total_weight_kg(),
        }
    }

    /// Render the one-line textual form.
    pub fn render_line(&self) -> String {
        format!(
            "Container {}: {}, product: {}, cargo: {}kg, total weight: {}kg",
            self.serial,
            self.kind,
            self.product.as_deref().unwrap_or("<none>"),
            self.cargo_kg,
            self.total_weight_kg
        )
    }
}

/// Structured ship report suitable for serialization or textual rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShipManifest {
    pub ship: String,
    pub max_speed_knots: f64,
    pub container_limit: usize,
    pub max_weight_tons: f64,
    pub container_count: usize,
    pub total_weight_tons: f64,
    pub containers: Vec<ContainerSummary>,
}

impl ShipManifest {
    /// Capture a ship's current state.
    pub fn from_ship(ship: &Ship) -> Self {
        Self {
            ship: ship.name().to_string(),
            max_speed_knots: ship.max_speed_knots(),
            container_limit: ship.max_containers(),
            max_weight_tons: ship.max_weight_tons(),
            container_count: ship.container_count(),
            total_weight_tons: ship.total_weight_kg() / 1000.0,
            containers: ship
                .containers()
                .iter()
                .map(ContainerSummary::from_container)
                .collect(),
        }
    }

    /// Render the ship report as plain text.
    pub fn render(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Ship {} - speed: {} knots, container slots: {}, weight limit: {} tons",
            self.ship, self.max_speed_knots, self.container_limit, self.max_weight_tons
        );
        let _ = writeln!(
            buffer,
            "Current load: {} containers, total weight: {} tons",
            self.container_count, self.total_weight_tons
        );
        let _ = writeln!(buffer, "Containers on board:");
        for container in &self.containers {
            let _ = writeln!(buffer, "  {}", container.render_line());
        }
        buffer
    }
}

/// Describe a single container on `ship`.
///
/// A missing serial is reported textually instead of failing.
pub fn describe_container(ship: &Ship, serial: &SerialNumber) -> String {
    match ship.container(serial) {
        Some(container) => ContainerSummary::from_container(container).render_line(),
        None => format!("No container with serial {serial} on board"),
    }
}
