pub use sea_orm_migration::prelude::*;

mod m20250610_141502_create_organizations_table;
mod m20250610_141623_create_users_table;
mod m20250610_142045_create_acts_table;
mod m20250610_142120_create_user_acts_table;
mod m20250610_142203_create_answers_table;
mod m20250610_143012_create_influencers_table;
mod m20250610_143155_create_brands_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250610_141502_create_organizations_table::Migration),
            Box::new(m20250610_141623_create_users_table::Migration),
            Box::new(m20250610_142045_create_acts_table::Migration),
            Box::new(m20250610_142120_create_user_acts_table::Migration),
            Box::new(m20250610_142203_create_answers_table::Migration),
            Box::new(m20250610_143012_create_influencers_table::Migration),
            Box::new(m20250610_143155_create_brands_table::Migration),
        ]
    }
}
