// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Spike threshold strategy
//!
//! The integration code treats the spike nonlinearity as an opaque
//! differentiable step function: forward value `1.0` where the shifted
//! voltage is non-negative, `0.0` otherwise. How (or whether) a gradient is
//! attached is entirely up to the [`Threshold`] implementation; the
//! [`SurrogateMethod`] name and `alpha` scale are passed through untouched
//! so surrogate-capable implementations can select their backward shape.

use core::str::FromStr;

use ndarray::Array2;

use crate::error::CobaLifError;

/// Surrogate-gradient family used by a backward-capable threshold.
///
/// Only relevant to gradient computation; every family shares the same hard
/// forward value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SurrogateMethod {
    /// No surrogate: zero gradient almost everywhere.
    #[default]
    Heaviside,
    /// Fast-sigmoid surrogate (SuperSpike).
    SuperSpike,
    /// Hyperbolic-tangent surrogate.
    Tanh,
    /// Piecewise-linear triangular surrogate.
    Triangle,
    /// Circular-distribution surrogate.
    CircDist,
    /// Complementary-error-function surrogate.
    HeaviErfc,
}

impl SurrogateMethod {
    /// Canonical method-name string, matching [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            SurrogateMethod::Heaviside => "heaviside",
            SurrogateMethod::SuperSpike => "super",
            SurrogateMethod::Tanh => "tanh",
            SurrogateMethod::Triangle => "triangle",
            SurrogateMethod::CircDist => "circ",
            SurrogateMethod::HeaviErfc => "heavi_erfc",
        }
    }
}

impl FromStr for SurrogateMethod {
    type Err = CobaLifError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "heaviside" => Ok(SurrogateMethod::Heaviside),
            "super" => Ok(SurrogateMethod::SuperSpike),
            "tanh" => Ok(SurrogateMethod::Tanh),
            "triangle" => Ok(SurrogateMethod::Triangle),
            "circ" => Ok(SurrogateMethod::CircDist),
            "heavi_erfc" => Ok(SurrogateMethod::HeaviErfc),
            _ => Err(CobaLifError::UnknownMethod(s.to_string())),
        }
    }
}

/// Elementwise spike threshold.
///
/// Contract: the returned tensor has the same shape as `x`, with value `1.0`
/// where `x >= 0.0` and `0.0` elsewhere in the forward pass. The inequality
/// is non-strict: an element exactly at the threshold spikes.
pub trait Threshold {
    fn threshold(&self, x: &Array2<f32>, method: SurrogateMethod, alpha: f32) -> Array2<f32>;
}

/// Forward-only hard threshold.
///
/// Ignores `method` and `alpha` since those shape only the backward pass.
/// This is the reference implementation when no gradient machinery is
/// attached; its output is exactly binary, which makes the step functions'
/// convex-combination reset an exact hard reset.
#[derive(Debug, Clone, Copy, Default)]
pub struct Heaviside;

impl Threshold for Heaviside {
    fn threshold(&self, x: &Array2<f32>, _method: SurrogateMethod, _alpha: f32) -> Array2<f32> {
        x.mapv(|v| if v >= 0.0 { 1.0 } else { 0.0 })
    }
}
