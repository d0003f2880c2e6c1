//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.0 server: every connection carries exactly one
//! request and is closed after the response.
//!
//! - **`connection`**: per-connection state machine
//! - **`parser`**: parses incoming HTTP requests from byte buffers
//! - **`request`**: request representation, method tokens, target splitting
//! - **`response`**: status codes and the response builder
//! - **`writer`**: serializes and writes responses to the client
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for a complete request
//!        └──────┬──────┘
//!               │ Request received (malformed → 400)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Route and build the response
//!        └──────┬───────────┘
//!               │ Response ready (icon request → Closed)
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               ▼
//!            Closed
//! ```

pub mod connection;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
