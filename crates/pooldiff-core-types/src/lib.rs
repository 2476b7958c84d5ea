//! Core types shared across pooldiff facilities
//!
//! - **Schema constants**: canonical field keys and event names used by the
//!   logging macros and the error facility

pub mod schema;
