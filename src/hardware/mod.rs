// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Hardware value types and host detection
//!
//! The profile types here are shared by the parser, the classifier and the
//! synthesizer.

pub mod detector;
pub mod preset;
pub mod profile;
pub mod tier;

pub use detector::*;
pub use preset::*;
pub use profile::*;
pub use tier::*;
