//! Cantabile — a melody notation synthesizer with a Markov chain composer.

pub mod agent;
pub mod compose;
pub mod config;
pub mod notation;
pub mod synth;
