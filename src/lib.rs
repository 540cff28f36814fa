//! Append-only personal life log backed by a single JSON file.
//!
//! [`store::LogStore`] owns the backing file: it loads the entry array,
//! appends one new [`models::Entry`], and writes the whole array back.
//! The `llog` binary is a thin CLI over that one operation.

pub mod input;
pub mod models;
pub mod store;
