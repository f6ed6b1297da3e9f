//! Configuration module

mod guide;

pub use guide::GuideConfig;
pub use guide::CONFIG_FILE;
