// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Forward-Euler step functions
//!
//! One discrete integration step per call, in the fixed order: conductance
//! decay, synaptic drive accumulation, voltage update, threshold, reset.
//! The order matters numerically: the voltage update reads the conductances
//! already updated within this step but the voltage from the previous step.
//!
//! Both functions are pure: inputs are taken by reference and never written,
//! and every output tensor is freshly allocated.

use ndarray::{Array2, Zip};

use crate::parameters::CobaLifParameters;
use crate::state::{CobaLifFeedForwardState, CobaLifState};
use crate::threshold::Threshold;

/// Default integration step size (seconds).
pub const DEFAULT_DT: f32 = 0.001;

/// Elementwise `max(w, 0)`.
fn rectified(w: &Array2<f32>) -> Array2<f32> {
    w.mapv(|x| x.max(0.0))
}

/// Elementwise `max(-w, 0)`.
fn rectified_neg(w: &Array2<f32>) -> Array2<f32> {
    w.mapv(|x| (-x).max(0.0))
}

/// Conductance-based voltage update.
///
/// Each conductance pulls the membrane toward its own reversal potential at
/// a rate proportional to the conductance magnitude. Reads the previous
/// voltage and the conductances already updated within this step.
fn integrate_voltage(
    v: &Array2<f32>,
    g_e: &Array2<f32>,
    g_i: &Array2<f32>,
    p: &CobaLifParameters,
    dt: f32,
) -> Array2<f32> {
    Zip::from(v).and(g_e).and(g_i).map_collect(|&v, &g_e, &g_i| {
        v + dt
            * p.c_m_inv
            * (p.g_l * (p.v_rest - v) + g_e * (p.e_rev_e - v) + g_i * (p.e_rev_i - v))
    })
}

/// Convex-combination spike reset: `v` where `z` is 0, `v_reset` where 1.
///
/// With a hard binary `z` this is an exact hard reset; with a smoothed `z`
/// from a surrogate-capable threshold the blend itself is the differentiable
/// relaxation.
fn reset_voltage(v: &Array2<f32>, z: &Array2<f32>, v_reset: f32) -> Array2<f32> {
    Zip::from(v)
        .and(z)
        .map_collect(|&v, &z| (1.0 - z) * v + z * v_reset)
}

/// Euler integration step for a recurrently connected CoBa LIF neuron.
///
/// The sign of each entry in `input_weights` and `recurrent_weights` selects
/// the conductance channel it drives: positive weights feed the excitatory
/// conductance, negative weights feed the inhibitory one with their
/// magnitude. The recurrent drive uses the *previous* step's spikes
/// (`state.z`).
///
/// # Arguments
/// * `input_spikes` - Incoming spikes, shape `[batch, input_features]`
/// * `state` - Current neuron state, fields of shape `[batch, neurons]`
/// * `input_weights` - Shape `[neurons, input_features]`
/// * `recurrent_weights` - Shape `[neurons, neurons]`
/// * `p` - Model parameters
/// * `dt` - Integration step size, see [`DEFAULT_DT`]
/// * `threshold` - Injected spike nonlinearity
///
/// # Returns
/// `(spikes, next_state)`; spikes have shape `[batch, neurons]`.
///
/// Shape mismatches panic inside `ndarray`; no additional validation is
/// performed here.
pub fn coba_lif_step<T: Threshold + ?Sized>(
    input_spikes: &Array2<f32>,
    state: &CobaLifState,
    input_weights: &Array2<f32>,
    recurrent_weights: &Array2<f32>,
    p: &CobaLifParameters,
    dt: f32,
    threshold: &T,
) -> (Array2<f32>, CobaLifState) {
    let mut g_e = &state.g_e - &(&state.g_e * (dt * p.tau_syn_exc_inv));
    let mut g_i = &state.g_i - &(&state.g_i * (dt * p.tau_syn_inh_inv));

    g_e += &input_spikes.dot(&rectified(input_weights).t());
    g_i += &input_spikes.dot(&rectified_neg(input_weights).t());

    g_e += &state.z.dot(&rectified(recurrent_weights).t());
    g_i += &state.z.dot(&rectified_neg(recurrent_weights).t());

    let v = integrate_voltage(&state.v, &g_e, &g_i, p, dt);
    let z_new = threshold.threshold(&(&v - p.v_thresh), p.method, p.alpha);
    let v = reset_voltage(&v, &z_new, p.v_reset);

    (z_new.clone(), CobaLifState::new(z_new, v, g_e, g_i))
}

/// Euler integration step for a feed-forward CoBa LIF neuron.
///
/// No weight matrices: the raw input's own sign routes it. Positive entries
/// accumulate into the excitatory conductance, negative entries into the
/// inhibitory conductance with their magnitude.
///
/// # Arguments
/// * `input` - Synaptic input, shape `[batch, neurons]`
/// * `state` - Current neuron state, fields of shape `[batch, neurons]`
/// * `p` - Model parameters
/// * `dt` - Integration step size, see [`DEFAULT_DT`]
/// * `threshold` - Injected spike nonlinearity
///
/// # Returns
/// `(spikes, next_state)`; spikes have shape `[batch, neurons]`.
pub fn coba_lif_feed_forward_step<T: Threshold + ?Sized>(
    input: &Array2<f32>,
    state: &CobaLifFeedForwardState,
    p: &CobaLifParameters,
    dt: f32,
    threshold: &T,
) -> (Array2<f32>, CobaLifFeedForwardState) {
    let mut g_e = &state.g_e - &(&state.g_e * (dt * p.tau_syn_exc_inv));
    let mut g_i = &state.g_i - &(&state.g_i * (dt * p.tau_syn_inh_inv));

    g_e += &rectified(input);
    g_i += &rectified_neg(input);

    let v = integrate_voltage(&state.v, &g_e, &g_i, p, dt);
    let z_new = threshold.threshold(&(&v - p.v_thresh), p.method, p.alpha);
    let v = reset_voltage(&v, &z_new, p.v_reset);

    (z_new.clone(), CobaLifFeedForwardState::new(v, g_e, g_i))
}
