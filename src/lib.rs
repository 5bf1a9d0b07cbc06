pub mod constants;
pub mod debounce;
pub mod domain;
pub mod error;
pub mod favorites;
pub mod logging;
pub mod registry;
pub mod source;
pub mod state;

pub mod pipeline;

// Layered boundaries for application and infrastructure
pub mod app;
pub mod infra;
