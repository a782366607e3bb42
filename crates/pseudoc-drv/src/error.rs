//! Error type for the `pseudoc-drv` crate boundary.
//!
//! This is deliberately narrow: malformed *pseudocode source* is never an
//! `Err` here, it's a [`pseudoc_util::Diagnostic`] inside a normal
//! [`crate::CompileResult`] (§7 of the spec — "no exception is ever
//! surfaced to callers from the compiler pipeline"). `DrvError` exists only
//! for things outside the source text's control: reading a file from disk,
//! a malformed CLI invocation.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrvError {
    #[error("failed to read source file {0}: {1}")]
    ReadSource(PathBuf, #[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DrvError>;
