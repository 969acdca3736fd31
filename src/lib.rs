// Public API exports (shared between client and server)
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;

// App is always available in fullstack mode
pub mod app;
