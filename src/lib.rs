//! # EthZip Snap
//!
//! A wallet-facing service that compares the estimated deployment cost of two
//! EVM bytecode blobs and renders the savings as a confirmation dialog for the
//! host wallet to display.

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod estimation;
pub mod requester;
pub mod rpc;
pub mod types;
