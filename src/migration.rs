pub use sea_orm_migration::prelude::*;

mod m20250106_000001_create_products_table;
mod m20250107_000002_create_users_profiles_posts;
mod m20250108_000003_create_orders_and_association;
mod m20250110_000004_drop_profiles_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    // Override the name of the migration table to avoid conflicts
    fn migration_table_name() -> sea_orm::DynIden {
        Alias::new("web_auth_demo_migrations").into_iden()
    }

    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250106_000001_create_products_table::Migration),
            Box::new(m20250107_000002_create_users_profiles_posts::Migration),
            Box::new(m20250108_000003_create_orders_and_association::Migration),
            Box::new(m20250110_000004_drop_profiles_table::Migration),
        ]
    }
}
