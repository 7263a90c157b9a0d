pub use sea_orm_migration::prelude::*;

mod m20260710_093000_depots;
mod m20260710_094500_lots;
mod m20260715_120000_stock_movements;
mod m20260715_121500_stock_consumption;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260710_093000_depots::Migration),
            Box::new(m20260710_094500_lots::Migration),
            Box::new(m20260715_120000_stock_movements::Migration),
            Box::new(m20260715_121500_stock_consumption::Migration),
        ]
    }
}
