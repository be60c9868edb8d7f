//! # Application Layer Network Protocols
//!
//! This module contains the application layer (OSI Layer 7) protocols built on
//! top of the core network traits.
//!
//! ## Available Protocols
//!
//! - **[`http`]**: HTTP/1.0 server and client for a single connection at a time
//!
//! ## Design Principles
//!
//! - **Connection Agnostic**: Work with any type implementing [`Endpoint`](crate::network::Endpoint)
//! - **No-std Compatible**: Designed for embedded systems without heap allocation
//! - **Resource Conscious**: Use fixed-size buffers and minimal memory
//! - **Bounded Waiting**: Every blocking step is limited by a millisecond budget

/// HTTP server and client implementation.
///
/// Provides a minimal HTTP/1.0 responder and requester suitable for embedded
/// systems, parsing only the request and status lines.
pub mod http;
