use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StockMovement::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StockMovement::Uuid)
                            .binary_len(16)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StockMovement::DocumentUuid)
                            .binary_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StockMovement::DepotUuid)
                            .binary_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StockMovement::EntityUuid)
                            .binary_len(16)
                            .not_null(),
                    )
                    .col(ColumnDef::new(StockMovement::IsExit).boolean().not_null())
                    .col(
                        ColumnDef::new(StockMovement::FluxId)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StockMovement::LotUuid)
                            .binary_len(16)
                            .not_null(),
                    )
                    .col(ColumnDef::new(StockMovement::Quantity).integer().not_null())
                    .col(ColumnDef::new(StockMovement::UnitCost).double().not_null())
                    .col(ColumnDef::new(StockMovement::Date).date().not_null())
                    .col(
                        ColumnDef::new(StockMovement::Description)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(StockMovement::UserId).integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-stock_movement-document_uuid")
                    .table(StockMovement::Table)
                    .col(StockMovement::DocumentUuid)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-stock_movement-depot_uuid")
                    .table(StockMovement::Table)
                    .col(StockMovement::DepotUuid)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StockMovement::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum StockMovement {
    Table,
    Uuid,
    DocumentUuid,
    DepotUuid,
    EntityUuid,
    IsExit,
    FluxId,
    LotUuid,
    Quantity,
    UnitCost,
    Date,
    Description,
    UserId,
}
