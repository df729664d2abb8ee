pub mod user_deactivator;

pub use user_deactivator::{UserDeactivator, UserDeactivatorError};
