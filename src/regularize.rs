// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Spike-rate regularization penalties
//!
//! Penalties computed over a recorded spike train of shape
//! `[time, batch, neurons]`, pushing mean firing rates back inside a target
//! band (https://arxiv.org/pdf/1910.07407.pdf). These consume the spike
//! outputs accumulated by the caller across step calls; they do not touch
//! neuron state.

use ndarray::{Array3, Axis};

/// Lower rate threshold below which no penalty applies.
pub const DEFAULT_THETA_L: f32 = 0.01;
/// Default strength of the lower-threshold penalty.
pub const DEFAULT_S_L: f32 = 1.0;
/// Upper rate threshold above which no penalty applies.
pub const DEFAULT_THETA_U: f32 = 100.0;
/// Default strength of the upper-threshold penalty.
pub const DEFAULT_S_U: f32 = 1.0;

/// Lower-threshold spike count penalty.
///
/// Per-unit mean firing rate over the time axis, shifted by `theta_l`,
/// rectified, squared and summed, then scaled by `s_l / N` where `N` is the
/// sum of the per-step dimension sizes.
pub fn spike_count_lower(spikes: &Array3<f32>, theta_l: f32, s_l: f32) -> f32 {
    let seq_length = spikes.len_of(Axis(0)) as f32;
    let n = (spikes.len_of(Axis(1)) + spikes.len_of(Axis(2))) as f32;
    let mean_rate = spikes.sum_axis(Axis(0)) / seq_length;
    let penalty = mean_rate
        .mapv(|r| {
            let excess = (r - theta_l).max(0.0);
            excess * excess
        })
        .sum();
    s_l / n * penalty
}

/// Upper-threshold mean spike count penalty.
///
/// Per-batch-element mean firing rate over time and units, shifted by
/// `theta_u`, rectified, squared and summed over the batch, then scaled by
/// `s_u / batch_size`.
pub fn spike_count_upper(spikes: &Array3<f32>, theta_u: f32, s_u: f32) -> f32 {
    let seq_length = spikes.len_of(Axis(0)) as f32;
    let batch_size = spikes.len_of(Axis(1)) as f32;
    let neurons = spikes.len_of(Axis(2)) as f32;
    let mean_rate = spikes.sum_axis(Axis(0)).sum_axis(Axis(1)) / (seq_length * neurons);
    let penalty = mean_rate
        .mapv(|r| {
            let excess = (r - theta_u).max(0.0);
            excess * excess
        })
        .sum();
    s_u / batch_size * penalty
}
