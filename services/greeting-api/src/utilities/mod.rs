pub mod app_state;
pub mod observability;
pub mod shutdown_signal;
