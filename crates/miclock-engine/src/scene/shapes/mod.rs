pub mod arc;
pub mod line;
pub mod path;
pub mod rect;
pub mod text;
