//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page pieces and read/write the page-owned state signals
//! they are handed as props.

pub mod asset_header;
pub mod asset_search;
pub mod category_picker;
pub mod detail_panel;
