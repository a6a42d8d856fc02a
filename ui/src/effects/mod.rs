//! Decorative behaviour with no data dependency on the rest of the page.

pub mod particles;
pub mod reveal;
