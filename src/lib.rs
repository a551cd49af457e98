#![allow(async_fn_in_trait)]
pub mod arguments;
pub mod cli;
pub mod error;
pub mod invocation;
pub mod launch_config;
pub mod presets;
pub mod runner;
