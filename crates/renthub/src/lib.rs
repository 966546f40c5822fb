//! Core domain logic for RentHub: the listing catalog and its filter engine,
//! the multi-step rental-application wizard, and the tenant dashboard model.
//!
//! Everything here is synchronous, in-process state; the HTTP routers and the
//! CLI in `services/api` are thin hosting layers over these types.

pub mod application;
pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod telemetry;
