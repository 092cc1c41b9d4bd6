//! Helper functions for report markup

mod html;

pub use html::*;
