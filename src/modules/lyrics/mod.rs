pub mod locator;
pub mod lrc;
