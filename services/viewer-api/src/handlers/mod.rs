//! HTTP request handlers for the viewer API.

pub mod figure;
pub mod health;
pub mod slices;
