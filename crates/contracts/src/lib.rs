//! Shared contracts between the admin frontend and the REST backend.
//!
//! Everything here is a plain DTO mirroring the backend's JSON, plus the
//! small amount of arithmetic the pages compute client-side (document
//! totals). The backend owns all invariants; these types only describe
//! the wire shapes.

pub mod domain;
pub mod shared;
