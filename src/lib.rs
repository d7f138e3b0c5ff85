//! Spanish to Arabic translation with per-word confidence scores.
//!
//! The library half of the `tarjama` binary: domain types for the worker
//! protocol, the confidence deriver, translation engines and the terminal
//! presenter.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod presentation;
