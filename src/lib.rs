//! Patient-side client for a treatment-planning service.
//!
//! The intake form collects symptoms, physical-condition attributes, and
//! a location; one POST to the planning service returns a three-section
//! treatment plan (medical actions, location considerations,
//! justifications), which the view layer renders. The service boundary
//! is a trait, so the offline fixture mode and the tests run without a
//! network.

pub mod client;
pub mod config;
pub mod form;
pub mod models;
pub mod session;
pub mod view;
