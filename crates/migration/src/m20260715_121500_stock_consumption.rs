use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Consumption aggregate, keyed by inventory record, depot and day. On MySQL
/// the `ComputeStockConsumptionByDate` procedure maintains it; elsewhere the
/// engine upserts into it directly.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StockConsumption::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StockConsumption::InventoryUuid)
                            .binary_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StockConsumption::DepotUuid)
                            .binary_len(16)
                            .not_null(),
                    )
                    .col(ColumnDef::new(StockConsumption::Date).date().not_null())
                    .col(
                        ColumnDef::new(StockConsumption::Quantity)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(StockConsumption::InventoryUuid)
                            .col(StockConsumption::DepotUuid)
                            .col(StockConsumption::Date),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StockConsumption::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum StockConsumption {
    Table,
    InventoryUuid,
    DepotUuid,
    Date,
    Quantity,
}
