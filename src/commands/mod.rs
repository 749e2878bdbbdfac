pub mod render;
pub mod show;
