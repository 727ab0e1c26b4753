mod get_all;
mod get_questions;

pub use self::get_all::*;
pub use self::get_questions::*;
