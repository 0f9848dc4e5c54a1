//! Identity types injected by the auth gateway.

pub mod identity;
