mod create;
mod delete;
mod get_all;
mod search;

pub use self::create::*;
pub use self::delete::*;
pub use self::get_all::*;
pub use self::search::*;
