//! Data models for the AgriAdvisor gateway
//!
//! This module contains the request-scoped domain models organized by concern:
//! - Advice: request, model output and the two failure payloads
//! - Weather: the snapshot extracted from the weather provider
//! - Reference: record shapes of the static lookup tables

pub mod advice;
pub mod reference;
pub mod weather;

// Re-export all public types for convenient access
pub use advice::{AdviceRequest, AdviceResponse, ErrorAdvice, MessageEnvelope, ValidationMessage};
pub use reference::{DepartmentContact, LandPrice, MarketPrice};
pub use weather::WeatherSnapshot;
