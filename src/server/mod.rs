// ABOUTME: HTTP server assembly for the recipe API
// ABOUTME: Groups shared resources, router setup, and lifecycle management
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Router and middleware stack
pub mod http_setup;
/// Bind, serve, and shutdown
pub mod lifecycle;
/// Shared resource container
pub mod resources;

pub use http_setup::build_router;
pub use lifecycle::ServerLifecycle;
pub use resources::ServerResources;
