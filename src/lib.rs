// Module layout (Clean Architecture style)
// - bootstrap: configuration and startup
// - infrastructure: DB/filesystem adapters
// - presentation: HTTP handlers and routing
// - application: ports, use cases and error contract
// - domain: core models

pub mod application;
pub mod bootstrap;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
