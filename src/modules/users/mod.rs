pub mod adapter;
pub mod application;

pub use adapter::outgoing::UserDeactivatorPostgres;
pub use application::services::token::{generate_temp_token, generate_token};
pub use application::use_cases::deactivate_user::{
    DeactivateUserError, DeactivateUserRequest, DeactivateUserUseCase, IDeactivateUserUseCase,
};
