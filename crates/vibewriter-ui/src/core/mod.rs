//! Core, DOM-free primitives and helpers for the status page.
pub mod controller;
pub mod status;
