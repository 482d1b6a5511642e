//! Record shapes of the static reference tables

use serde::{Serialize, Serializer};

/// Mandi price of a single commodity
#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct MarketPrice {
    pub name: &'static str,
    /// Rupees per kilogram
    #[serde(serialize_with = "serialize_price")]
    pub price: f64,
}

/// Whole prices go out as integers (`25`, not `25.0`)
fn serialize_price<S: Serializer>(price: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if price.fract() == 0.0 && price.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*price as i64)
    } else {
        serializer.serialize_f64(*price)
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct LandPrice {
    pub location: &'static str,
    pub price: u32,
    pub unit: &'static str,
}

/// Helpline of an agriculture body
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct DepartmentContact {
    pub name: &'static str,
    pub phone: &'static str,
}
