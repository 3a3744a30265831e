//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped state and delegates rendering details
//! to `components`.

pub mod asset_detail;
pub mod catalog;
