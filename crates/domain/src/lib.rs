//! # umbra-domain
//!
//! Pure domain model for the umbra theme preference system.
//!
//! ## Responsibilities
//! - Define [`ThemeMode`](theme::ThemeMode) — the two-valued dark/light
//!   preference and its string/boolean conventions
//! - Define the workspace error conventions ([`error::UmbraError`])
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod theme;
