pub mod modules;
pub mod shared;

pub use modules::users;
