pub mod build;
pub mod create;
pub mod watch;
