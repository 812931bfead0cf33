//! routeperf-cli: run configuration and the report pipeline behind the
//! `routeperf` binary.
pub mod cli;
pub mod input;
pub mod pipeline;
pub mod util;
