#![doc(hidden)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for pkgrank
//!
//! pkgrank rates open-source packages (GitHub repositories and npm packages) by
//! combining repository activity counts and an OpenSSF Scorecard health report into a
//! bounded composite quality score.
//!
//! # Module Organization
//!
//! - [`scoring`]: Metric normalization and aggregation
//! - [`facts`]: Data collection from GitHub, the npm registry, and Scorecard
//! - [`reports`]: Report generation
//! - [`commands`]: Command-line interface and orchestration

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

#[cfg(any(debug_assertions, test))]
pub mod commands;
#[cfg(not(any(debug_assertions, test)))]
mod commands;

pub mod facts;

#[cfg(any(debug_assertions, test))]
pub mod reports;
#[cfg(not(any(debug_assertions, test)))]
mod reports;

pub mod scoring;

pub use crate::commands::{Host, run};
