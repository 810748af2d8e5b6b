//! Synthetic bathymetry and solitary-wave initial conditions.
//!
//! A [`Config`] selects a [`Shape`]; [`sample`] (or [`sample_par`])
//! evaluates it over every cell and returns a [`grd::Grid`] ready to
//! be written by the `grd` crate.

mod classify;
mod config;
mod error;
mod math;
mod profile;
mod sampler;

pub use crate::{
    classify::classify,
    config::{Config, Edge, Shape, WaveKind},
    error::BathyError,
    math::Blend,
    sampler::{sample, sample_par},
};
pub use grd;
