// Domain layer: core models, user-facing messages and ports (interfaces) to the page.

pub mod messages;
pub mod model;
pub mod ports;
