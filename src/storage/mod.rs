pub mod keys;
pub mod users;

pub use keys::*;
pub use users::*;
