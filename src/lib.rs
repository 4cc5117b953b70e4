//! A Concourse resource which tracks Helm chart versions published on Artifact Hub.
//!
//! `check` lists every published version of a chart in ascending semver order, and `in`
//! materializes the metadata of a single version as files on disk.

pub mod cli;
pub mod client;
pub mod core;
pub mod error;
