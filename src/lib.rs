//! Stagedoor - Access Control & Content Entitlement Core
//!
//! This crate implements the membership and entitlement layer of a
//! gated content platform: session lifecycle, admin authorization,
//! price-tier entitlement, and media upload validation/ingestion.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
