// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! CoBa LIF model parameters
//!
//! An immutable bundle of the physical constants of the neuron model plus
//! the surrogate-gradient configuration handed through to the injected
//! threshold. Constructed once per simulation configuration and shared
//! read-only across all step calls and state instances.

use crate::error::CobaLifError;
use crate::threshold::SurrogateMethod;

/// Parameters of a conductance-based LIF neuron.
///
/// Defaults model a biologically plausible regime: reversal potentials far
/// above/below rest, reset below rest, threshold above rest. Any subset of
/// fields can be overridden with struct-update syntax:
///
/// ```
/// use coba_lif::CobaLifParameters;
///
/// let p = CobaLifParameters {
///     g_l: 0.3,
///     ..CobaLifParameters::default()
/// };
/// assert_eq!(p.v_rest, -20.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CobaLifParameters {
    /// Inverse excitatory synaptic time constant (1/ms).
    pub tau_syn_exc_inv: f32,
    /// Inverse inhibitory synaptic time constant (1/ms).
    pub tau_syn_inh_inv: f32,
    /// Inverse membrane capacitance.
    pub c_m_inv: f32,
    /// Leak conductance.
    pub g_l: f32,
    /// Inhibitory reversal potential (mV).
    pub e_rev_i: f32,
    /// Excitatory reversal potential (mV).
    pub e_rev_e: f32,
    /// Rest membrane potential (mV).
    pub v_rest: f32,
    /// Reset membrane potential after a spike (mV).
    pub v_reset: f32,
    /// Spike threshold potential (mV).
    pub v_thresh: f32,
    /// Surrogate-gradient family passed to the threshold.
    pub method: SurrogateMethod,
    /// Surrogate-gradient sharpness/scale hyperparameter.
    pub alpha: f32,
}

impl Default for CobaLifParameters {
    fn default() -> Self {
        CobaLifParameters {
            tau_syn_exc_inv: 1.0 / 5.0,
            tau_syn_inh_inv: 1.0 / 5.0,
            c_m_inv: 1.0 / 0.2,
            g_l: 1.0 / 20.0 * 1.0 / 0.2,
            e_rev_i: -100.0,
            e_rev_e: 60.0,
            v_rest: -20.0,
            v_reset: -70.0,
            v_thresh: -10.0,
            method: SurrogateMethod::Heaviside,
            alpha: 0.0,
        }
    }
}

impl CobaLifParameters {
    /// Create parameters with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that the bundle describes a physically meaningful neuron.
    ///
    /// Time-constant inverses, capacitance inverse and leak conductance must
    /// be non-negative, and the reset potential must not exceed the spike
    /// threshold (a reset above threshold would re-fire every step).
    pub fn validate(&self) -> Result<(), CobaLifError> {
        if self.tau_syn_exc_inv < 0.0 {
            return Err(CobaLifError::InvalidParameter(
                "tau_syn_exc_inv must be non-negative",
            ));
        }
        if self.tau_syn_inh_inv < 0.0 {
            return Err(CobaLifError::InvalidParameter(
                "tau_syn_inh_inv must be non-negative",
            ));
        }
        if self.c_m_inv < 0.0 {
            return Err(CobaLifError::InvalidParameter("c_m_inv must be non-negative"));
        }
        if self.g_l < 0.0 {
            return Err(CobaLifError::InvalidParameter("g_l must be non-negative"));
        }
        if self.v_reset > self.v_thresh {
            return Err(CobaLifError::InvalidParameter(
                "v_reset must not exceed v_thresh",
            ));
        }
        Ok(())
    }
}
