// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Error types for CoBa LIF operations

use thiserror::Error;

/// Errors produced when constructing or validating model configuration.
///
/// The step functions themselves never return errors: shape or broadcast
/// mismatches between tensors are caller contract violations that surface
/// as `ndarray`'s standard panics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CobaLifError {
    /// A parameter value is outside its physically meaningful range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    /// A surrogate-gradient method name did not match any known family.
    #[error("unknown surrogate gradient method: {0:?}")]
    UnknownMethod(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, CobaLifError>;
