pub(crate) mod config;
pub(crate) mod play;
pub(crate) mod scan;
pub(crate) mod times;
