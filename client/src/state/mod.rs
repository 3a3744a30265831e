//! View-state modules.
//!
//! DESIGN
//! ======
//! Each page owns its state in a signal and mutates it only through the
//! transition methods defined here, so the rules are testable without a DOM.

pub mod catalog;
pub mod detail;
