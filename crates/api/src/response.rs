//! Shared response envelope types for API handlers.
//!
//! Internal endpoints use a `{ "data": ... }` envelope. The generation
//! endpoint is the exception: it answers with the bare
//! `{ "imageUrl", "prompt" }` object its clients already consume.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
