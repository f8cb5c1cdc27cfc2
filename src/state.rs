// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Neuron state records
//!
//! Plain value structs with structural equality. A step call never mutates
//! the state it is given; it allocates and returns a brand-new record, so
//! states can be cloned, compared and shared without aliasing concerns.
//! All fields share the shape `[batch, neurons]`.

use ndarray::Array2;

use crate::parameters::CobaLifParameters;

/// State of a recurrently connected conductance-based LIF neuron.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CobaLifState {
    /// Spikes emitted on the previous step, entries in {0, 1}.
    pub z: Array2<f32>,
    /// Membrane potential.
    pub v: Array2<f32>,
    /// Excitatory input conductance.
    pub g_e: Array2<f32>,
    /// Inhibitory input conductance.
    pub g_i: Array2<f32>,
}

impl CobaLifState {
    pub fn new(z: Array2<f32>, v: Array2<f32>, g_e: Array2<f32>, g_i: Array2<f32>) -> Self {
        CobaLifState { z, v, g_e, g_i }
    }

    /// Quiescent initial condition: no spikes, no conductance, membrane at
    /// the rest potential.
    pub fn initial(batch: usize, neurons: usize, parameters: &CobaLifParameters) -> Self {
        CobaLifState {
            z: Array2::zeros((batch, neurons)),
            v: Array2::from_elem((batch, neurons), parameters.v_rest),
            g_e: Array2::zeros((batch, neurons)),
            g_i: Array2::zeros((batch, neurons)),
        }
    }

    /// Batch size (leading dimension).
    pub fn batch(&self) -> usize {
        self.v.nrows()
    }

    /// Neuron count per batch element.
    pub fn neurons(&self) -> usize {
        self.v.ncols()
    }
}

/// State of a feed-forward conductance-based LIF neuron.
///
/// Same as [`CobaLifState`] minus the recurrent spike term.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CobaLifFeedForwardState {
    /// Membrane potential.
    pub v: Array2<f32>,
    /// Excitatory input conductance.
    pub g_e: Array2<f32>,
    /// Inhibitory input conductance.
    pub g_i: Array2<f32>,
}

impl CobaLifFeedForwardState {
    pub fn new(v: Array2<f32>, g_e: Array2<f32>, g_i: Array2<f32>) -> Self {
        CobaLifFeedForwardState { v, g_e, g_i }
    }

    /// Quiescent initial condition: no conductance, membrane at rest.
    pub fn initial(batch: usize, neurons: usize, parameters: &CobaLifParameters) -> Self {
        CobaLifFeedForwardState {
            v: Array2::from_elem((batch, neurons), parameters.v_rest),
            g_e: Array2::zeros((batch, neurons)),
            g_i: Array2::zeros((batch, neurons)),
        }
    }

    /// Batch size (leading dimension).
    pub fn batch(&self) -> usize {
        self.v.nrows()
    }

    /// Neuron count per batch element.
    pub fn neurons(&self) -> usize {
        self.v.ncols()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_recurrent_state() {
        let p = CobaLifParameters::default();
        let s = CobaLifState::initial(2, 3, &p);
        assert_eq!(s.batch(), 2);
        assert_eq!(s.neurons(), 3);
        assert_eq!(s.z.dim(), (2, 3));
        assert!(s.z.iter().all(|&z| z == 0.0));
        assert!(s.v.iter().all(|&v| v == p.v_rest));
        assert!(s.g_e.iter().all(|&g| g == 0.0));
        assert!(s.g_i.iter().all(|&g| g == 0.0));
    }

    #[test]
    fn test_initial_feed_forward_state() {
        let p = CobaLifParameters::default();
        let s = CobaLifFeedForwardState::initial(4, 1, &p);
        assert_eq!(s.batch(), 4);
        assert_eq!(s.neurons(), 1);
        assert!(s.v.iter().all(|&v| v == p.v_rest));
    }

    #[test]
    fn test_structural_equality() {
        let p = CobaLifParameters::default();
        let a = CobaLifState::initial(1, 2, &p);
        let b = a.clone();
        assert_eq!(a, b);
    }
}
