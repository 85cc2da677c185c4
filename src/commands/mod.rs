// Modules --------------------------------------------------------------------
pub mod compress;
pub mod sheet;
pub mod tilemap;
pub mod tileset;
