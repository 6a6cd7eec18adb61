mod category;

pub use category::{Category, Level, NewCategory};
