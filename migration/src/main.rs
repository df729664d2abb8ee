use sea_orm_migration::prelude::*;

#[async_std::main]
#[cfg(not(tarpaulin_include))]
async fn main() {
    cli::run_cli(migration::Migrator).await;
}
