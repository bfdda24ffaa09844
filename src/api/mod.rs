//! Client side of the attendance REST API.

pub mod client;
#[cfg(test)]
pub mod fake;

pub use client::{AttendanceApi, HttpApi};
