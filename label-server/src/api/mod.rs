//! HTTP API modules

pub mod health;
pub mod pages;
pub mod print;
