//! # label-agent
//!
//! Local relay agent for LAN printers.
//!
//! A web app running on the public internet cannot reach a printer on a
//! private LAN. This agent runs next to the printer, accepts a pre-rendered
//! ZPL payload over HTTP and forwards it to the printer over raw TCP.
//! CORS is permissive so a browser app on any origin can call it directly.

pub mod api;
pub mod middleware;

pub use api::{AgentError, router};
