pub mod deactivate_user;

pub use deactivate_user::{
    DeactivateUserError, DeactivateUserRequest, DeactivateUserUseCase, IDeactivateUserUseCase,
};
