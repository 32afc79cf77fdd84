//! resultbot-lib: Core types and logic for resultbot
//!
//! This crate provides the types used by the `rbot` CLI:
//! - `BuildBot`: resolves builder names to `Builder` handles
//! - `Builder` / `Build`: derive results URLs and fetch layout-test results
//! - `ResultsProvider`: where results come from (canned or over HTTP)
//! - `LayoutTestResults`: parsed results of a layout-test run
//! - `fingerprint`: masked string fingerprints for translation ids

pub mod buildbot;
pub mod config;
pub mod consts;
pub mod fingerprint;
pub mod provider;
pub mod results;
