pub mod accumulator;
pub mod block;
pub mod canvas;
pub mod color;
pub mod grid_manager;
pub mod painter;
pub mod quadrant;
pub mod smart_color;
pub mod utils;
