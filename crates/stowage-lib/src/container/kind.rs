//! Container specializations and the hazard-alert capability.

use crate::serial::KindTag;

/// Specialized container variants with their kind-specific fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContainerKind {
    /// Liquid cargo; hazardous loads are held to a stricter fill limit.
    Liquid { hazardous: bool },
    /// Pressurised gas. The pressure reading is informational only.
    Gas { pressure_bar: f64 },
    /// Temperature-controlled stowage for known perishable products.
    Refrigerated { temperature_c: f64 },
}

impl ContainerKind {
    /// Serial number tag for this kind.
    pub fn tag(&self) -> KindTag {
        match self {
            ContainerKind::Liquid { .. } => KindTag::Liquid,
            ContainerKind::Gas { .. } => KindTag::Gas,
            ContainerKind::Refrigerated { .. } => KindTag::Refrigerated,
        }
    }

    /// Human-readable label shown in reports.
    pub fn label(&self) -> &'static str {
        match self {
            ContainerKind::Liquid { .. } => "liquid",
            ContainerKind::Gas { .. } => "gas",
            ContainerKind::Refrigerated { .. } => "refrigerated",
        }
    }
}

/// Cargo classes that raise hazard alerts when a load is refused.
///
/// Only liquid and gas containers carry this capability; refrigerated
/// containers never alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HazardClass {
    Liquid,
    Gas,
}

impl HazardClass {
    /// Label used in the emitted warning record.
    pub fn label(self) -> &'static str {
        match self {
            HazardClass::Liquid => "liquid",
            HazardClass::Gas => "gas",
        }
    }
}
