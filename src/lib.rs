//! Core library for the `inferbench` CLI.
//!
//! This crate provides the internal building blocks used by the binary: CLI
//! argument types, configuration parsing, completion request execution,
//! outcome collection and aggregation, and report output. The primary
//! user-facing interface is the `inferbench` command-line application;
//! library APIs may evolve as the CLI grows.
pub mod args;
pub mod bench;
pub mod config;
pub mod error;
pub mod http;
pub mod metrics;
pub mod sinks;
