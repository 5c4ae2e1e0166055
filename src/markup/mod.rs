pub mod emit;
pub mod format;
pub mod model;
