//! Scroll-linked timeline: authored tweens, their evaluation, scrub smoothing
//! and the scroll sources that feed it.

pub mod driver;
pub mod easing;
pub mod scroll_source;
pub mod scrub;
pub mod timeline;
