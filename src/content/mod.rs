//! Public content assembly: defaults, image fallbacks, sector resolution and
//! page models.

pub mod fallback;
pub mod images;
pub mod pages;
pub mod resolver;
