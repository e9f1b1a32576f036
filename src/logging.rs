// ABOUTME: Tracing subscriber setup with env-filter control
// ABOUTME: RUST_LOG overrides the default level passed by the caller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savora Contributors

use tracing_subscriber::EnvFilter;

/// Initialize structured logging.
///
/// `RUST_LOG` takes precedence over `default_level`. Safe to call more
/// than once; later calls are no-ops.
pub fn init(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
