//! # umbra-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that storage adapters must implement
//!   (driven/outbound port): [`ports::PreferenceStore`] — synchronous
//!   key-value persistence for user preferences
//! - Provide the **observable theme cell** ([`theme_cell::ThemeCell`]) — the
//!   in-memory dark-mode flag with synchronous subscriber notification
//! - Provide the **theme service** ([`theme_service::ThemeService`]) — the
//!   use-cases that compose the cell update with persistence
//!
//! ## Dependency rule
//! Depends on `umbra-domain` only. Never imports adapter crates. Adapters
//! depend on *this* crate, not the reverse.

pub mod ports;
pub mod theme_cell;
pub mod theme_service;
