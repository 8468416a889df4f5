//! Load-test driver for the javatheque web application.
//!
//! Simulated users log in (registering on a miss), then browse the library,
//! search, add, show and rate films against a running server. A MongoDB
//! fixture empties the test database before and after the run.

pub mod config;
pub mod domain;
pub mod endpoints;
pub mod error;
pub mod fixture;
pub mod scenario;
pub mod scrape;
pub mod session;
pub mod smoke;
pub mod stats;
pub mod tasks;
pub mod telemetry;
pub mod transport;
