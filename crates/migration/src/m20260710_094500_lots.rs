use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Lot::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Lot::Uuid)
                            .binary_len(16)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Lot::Label).string().not_null())
                    .col(ColumnDef::new(Lot::UnitCost).double().not_null())
                    .col(ColumnDef::new(Lot::InventoryUuid).binary_len(16))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-lot-label")
                    .table(Lot::Table)
                    .col(Lot::Label)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Lot::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Lot {
    Table,
    Uuid,
    Label,
    UnitCost,
    InventoryUuid,
}
