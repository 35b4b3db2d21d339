//! Radiance - AI Energy Radar
//!
//! A curated catalog of AI applications across the energy sector, laid out
//! on a semicircular maturity radar, grouped along the energy value chain,
//! and extended at runtime through a validated submission form.

pub mod catalog;
pub mod chain;
pub mod config;
pub mod facets;
pub mod filter;
pub mod intake;
pub mod layout;
pub mod model;
pub mod session;
pub mod svg;
pub mod views;
