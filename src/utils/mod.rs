pub mod debounce;
pub mod error;
pub mod logger;
pub mod throttle;
pub mod validation;
