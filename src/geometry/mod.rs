pub mod line;
pub mod triangle;

pub use line::Line;
pub use triangle::Triangle;
