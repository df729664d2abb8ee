pub mod sea_orm_entity;
mod user_deactivator_postgres;

pub use user_deactivator_postgres::UserDeactivatorPostgres;
