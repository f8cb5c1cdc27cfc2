// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Conductance-Based LIF Neuron Primitives
//!
//! Single-step forward-Euler integration of a conductance-based leaky
//! integrate-and-fire (CoBa LIF) neuron, in two connectivity variants:
//! - **Recurrent**: spike input projected through input weights, plus the
//!   previous step's own spikes projected through recurrent weights.
//! - **Feed-forward**: a continuous synaptic input whose sign routes it
//!   directly into the excitatory or inhibitory conductance channel.
//!
//! Each call is a pure transition function: it takes the current state by
//! reference, allocates fresh output tensors, and returns
//! `(spikes, next_state)`. Nothing is mutated in place, so a state value can
//! be reused or shared freely and batch parallelism falls out of `ndarray`'s
//! vectorized semantics.
//!
//! The spike nonlinearity is an injected [`Threshold`] strategy. The shipped
//! [`Heaviside`] implementation gives the exact hard forward value; callers
//! with gradient machinery can inject a surrogate-gradient implementation
//! and the integration code stays agnostic to it.
//!
//! ```
//! use coba_lif::{coba_lif_feed_forward_step, CobaLifFeedForwardState,
//!                CobaLifParameters, Heaviside, DEFAULT_DT};
//! use ndarray::Array2;
//!
//! let p = CobaLifParameters::default();
//! let state = CobaLifFeedForwardState::initial(1, 4, &p);
//! let input = Array2::from_elem((1, 4), 0.5);
//!
//! let (spikes, next) = coba_lif_feed_forward_step(&input, &state, &p, DEFAULT_DT, &Heaviside);
//! assert_eq!(spikes.dim(), (1, 4));
//! assert_eq!(next.g_e[[0, 0]], 0.5);
//! ```

pub mod error;
pub mod parameters;
pub mod regularize;
pub mod state;
pub mod step;
pub mod threshold;

// Re-export everything for convenience
pub use error::CobaLifError;
pub use parameters::CobaLifParameters;
pub use regularize::{spike_count_lower, spike_count_upper};
pub use state::{CobaLifFeedForwardState, CobaLifState};
pub use step::{coba_lif_feed_forward_step, coba_lif_step, DEFAULT_DT};
pub use threshold::{Heaviside, SurrogateMethod, Threshold};
