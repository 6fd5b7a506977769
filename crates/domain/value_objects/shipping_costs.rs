use serde::{Deserialize, Serialize};

use crate::domain::value_objects::enums::couriers::Courier;

/// Missing query fields decode to empty values and are rejected by validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ShippingCostQuery {
    pub origin: String,
    pub destination: String,
    /// Grams.
    pub weight: i32,
    pub courier: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShippingCostOption {
    pub courier: Courier,
    pub service: String,
    pub description: String,
    /// Provider currency units.
    pub cost: i64,
    /// Estimated days in transit as reported by the provider, e.g. "2-3".
    pub etd: String,
}

pub fn shipping_cost_cache_key(
    origin: &str,
    destination: &str,
    weight: i32,
    courier: Courier,
) -> String {
    format!(
        "shipping_cost:{}:{}:{}:{}",
        origin.trim(),
        destination.trim(),
        weight,
        courier
    )
}
