pub mod render;
pub mod structure;
