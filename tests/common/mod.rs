//! Common test utilities for spider CLI tests.
//!
//! - `TestEnv`: isolated project directory plus a runner for the binary
//! - Fixtures: reusable `spider.yaml` contents

pub mod env;
pub mod fixtures;

#[allow(unused_imports)]
pub use env::*;
#[allow(unused_imports)]
pub use fixtures::*;
