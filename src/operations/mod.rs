pub mod morley;
pub mod napoleon;

pub use morley::{EdgeTips, Morley, MorleyFigure};
pub use napoleon::{Napoleon, NapoleonFigure};
