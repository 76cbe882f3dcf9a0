//! The streaming module orchestrator.
//!
//! This is the "just works" layer: raw inbound chunks go in, typed value
//! slots come out, and application values route back onto the wire with
//! per-destination formatting. A [`StreamModule`] owns a frame decoder, a
//! value binding table and an outbound transport; the host pushes bytes or
//! lines into it from whatever I/O loop it runs.

pub mod config;
pub mod error;
pub mod hooks;
pub mod module;
pub mod route;
pub mod state;

pub use config::ModuleConfig;
pub use error::{ModuleError, Result};
pub use hooks::{ModuleObserver, ScriptHost};
pub use module::StreamModule;
pub use route::{format_route, RouteParams};
pub use state::ModuleState;
