// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! boottune - turns a hardware diagnostic report into a tuned boot.config.
//!
//! The crate is a three-stage pipeline plus a thin CLI shell:
//! - `parser`: DxDiag-style text to a [`hardware::HardwareProfile`]
//! - `classifier`: GPU identity (report card name or capability probe) to a
//!   [`hardware::Tier`]
//! - `synth`: threads, tier, RAM, runtime version and platform to a
//!   [`synth::ConfigDocument`]
//!
//! The pipeline is pure and never fails. Reading reports, settings and
//! writing the output file happen in `commands`, `config` and `main.rs`.

pub mod classifier;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod hardware;
pub mod parser;
pub mod synth;
pub mod utils;

pub use classifier::{classify, ClassifyOptions};
pub use error::{Result, TuneError};
pub use hardware::{HardwareProfile, Tier};
pub use parser::parse;
pub use synth::{synthesize, ConfigDocument};
