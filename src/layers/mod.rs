pub mod overlay;
pub mod tile;
