// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! End-to-end property tests for the CoBa LIF step functions.
//!
//! These drive the step functions over many ticks the way a simulation loop
//! would: hold a state value, call the step with fresh input, feed the
//! returned state back in.

use coba_lif::{
    coba_lif_feed_forward_step, coba_lif_step, spike_count_lower, spike_count_upper,
    CobaLifFeedForwardState, CobaLifParameters, CobaLifState, Heaviside, DEFAULT_DT,
};
use ndarray::{array, Array2, Array3, Axis};

#[test]
fn constant_drive_produces_spikes_and_hard_resets() {
    let p = CobaLifParameters::default();
    let mut state = CobaLifFeedForwardState::initial(1, 1, &p);
    let input = array![[10.0]];

    let mut spike_count = 0;
    for _ in 0..200 {
        let (z, next) = coba_lif_feed_forward_step(&input, &state, &p, DEFAULT_DT, &Heaviside);
        if z[[0, 0]] == 1.0 {
            spike_count += 1;
            assert_eq!(next.v[[0, 0]], p.v_reset);
        } else {
            assert_eq!(z[[0, 0]], 0.0);
        }
        state = next;
    }
    assert!(spike_count > 0, "constant excitatory drive must elicit spikes");
}

#[test]
fn quiescent_network_stays_quiescent() {
    let p = CobaLifParameters::default();
    let mut state = CobaLifState::initial(2, 3, &p);
    let input_weights = Array2::from_elem((3, 4), 0.5);
    let recurrent_weights = Array2::from_elem((3, 3), 0.5);
    let input = Array2::zeros((2, 4));

    for _ in 0..50 {
        let (z, next) = coba_lif_step(
            &input,
            &state,
            &input_weights,
            &recurrent_weights,
            &p,
            DEFAULT_DT,
            &Heaviside,
        );
        assert!(z.iter().all(|&z| z == 0.0));
        assert!(next.v.iter().all(|&v| (v - p.v_rest).abs() < 1e-5));
        state = next;
    }
}

#[test]
fn conductance_decay_follows_geometric_law_across_steps() {
    let p = CobaLifParameters::default();
    let mut state = CobaLifFeedForwardState {
        g_e: array![[1.0]],
        ..CobaLifFeedForwardState::initial(1, 1, &p)
    };
    let input = Array2::zeros((1, 1));
    let factor = 1.0 - DEFAULT_DT * p.tau_syn_exc_inv;

    let mut expected = 1.0f32;
    for _ in 0..1000 {
        let (_, next) = coba_lif_feed_forward_step(&input, &state, &p, DEFAULT_DT, &Heaviside);
        expected *= factor;
        assert!((next.g_e[[0, 0]] - expected).abs() < 1e-4);
        state = next;
    }
    assert!(state.g_e[[0, 0]] < 1.0);
    assert!(state.g_e[[0, 0]] > 0.0);
}

#[test]
fn inhibitory_input_suppresses_spiking() {
    let p = CobaLifParameters::default();
    // Neuron 0 gets excitatory drive, neuron 1 the same magnitude inhibitory.
    let input = array![[10.0, -10.0]];
    let mut state = CobaLifFeedForwardState::initial(1, 2, &p);
    let mut excited_spikes = 0;
    let mut inhibited_spikes = 0;

    for _ in 0..300 {
        let (z, next) = coba_lif_feed_forward_step(&input, &state, &p, DEFAULT_DT, &Heaviside);
        excited_spikes += z[[0, 0]] as i32;
        inhibited_spikes += z[[0, 1]] as i32;
        state = next;
    }

    assert!(excited_spikes > 0);
    // Inhibition pulls the membrane toward e_rev_i, away from threshold.
    assert_eq!(inhibited_spikes, 0);
}

#[test]
fn recorded_spike_train_feeds_regularizers() {
    let p = CobaLifParameters::default();
    let mut state = CobaLifFeedForwardState::initial(2, 3, &p);
    let input = Array2::from_elem((2, 3), 8.0);
    let steps = 100;

    let mut train = Array3::zeros((steps, 2, 3));
    for t in 0..steps {
        let (z, next) = coba_lif_feed_forward_step(&input, &state, &p, DEFAULT_DT, &Heaviside);
        train.index_axis_mut(Axis(0), t).assign(&z);
        state = next;
    }

    let lower = spike_count_lower(&train, 0.01, 1.0);
    let upper = spike_count_upper(&train, 100.0, 1.0);
    assert!(lower >= 0.0);
    assert_eq!(upper, 0.0, "rates cannot exceed one spike per step");
    assert!(
        train.sum() > 0.0,
        "strong constant drive must produce a non-empty spike train"
    );
}

#[cfg(feature = "serde")]
#[test]
fn state_serde_round_trip() {
    let p = CobaLifParameters::default();
    let state = CobaLifState::initial(2, 2, &p);
    let json = serde_json::to_string(&state).unwrap();
    let back: CobaLifState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, state);
}
