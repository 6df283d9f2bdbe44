//! Virtualenv bootstrap library.
//!
//! This crate provides the core functionality for bootstrapping a virtualenv
//! from only a base Python interpreter: downloading a pinned release archive,
//! verifying its digest, extracting it to a transient staging directory, and
//! delegating execution to the extracted entry script. It is used by the
//! `virtualenv-bootstrap` CLI binary and can be consumed programmatically for
//! testing or custom bootstrap workflows.
//!
//! # Modules
//!
//! - [`cli`] - Command-line argument definitions
//! - [`digest`] - Digest algorithms and validated expected digests
//! - [`download`] - HTTP archive retrieval
//! - [`error`] - Semantic error types for each bootstrap step
//! - [`extract`] - Tarball extraction with root-segment stripping
//! - [`interpreter`] - Python interpreter resolution
//! - [`invoke`] - Delegated execution of the extracted tool
//! - [`output`] - Status-line and source-listing formatting
//! - [`pipeline`] - Bootstrap run orchestration
//! - [`source`] - Archive source profiles and source-file loading
//! - [`staging`] - Transient staging directory lifecycle

pub mod cli;
pub mod digest;
pub mod download;
pub mod error;
pub mod extract;
pub mod interpreter;
pub mod invoke;
pub mod output;
pub mod pipeline;
pub mod source;
pub mod staging;
