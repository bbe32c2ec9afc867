use sea_orm_migration::prelude::*;

use super::m20250106_000001_create_products_table::Products;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Orders::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Orders::PromoCode).string())
                    .col(
                        ColumnDef::new(Orders::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Association object, not a bare link table: the row carries
        // quantity and unit_price on top of the two foreign keys. Deletes
        // are restricted, so a parent referenced by rows cannot be removed.
        manager
            .create_table(
                Table::create()
                    .table(OrderProductAssociation::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OrderProductAssociation::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(OrderProductAssociation::OrderId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OrderProductAssociation::ProductId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OrderProductAssociation::Quantity)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(OrderProductAssociation::UnitPrice)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_product_association_order_id")
                            .from(
                                OrderProductAssociation::Table,
                                OrderProductAssociation::OrderId,
                            )
                            .to(Orders::Table, Orders::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_product_association_product_id")
                            .from(
                                OrderProductAssociation::Table,
                                OrderProductAssociation::ProductId,
                            )
                            .to(Products::Table, Products::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("index_unique_order_product")
                    .table(OrderProductAssociation::Table)
                    .col(OrderProductAssociation::OrderId)
                    .col(OrderProductAssociation::ProductId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(OrderProductAssociation::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Orders {
    Table,
    Id,
    PromoCode,
    CreatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum OrderProductAssociation {
    #[sea_orm(iden = "order_product_association_table")]
    Table,
    Id,
    OrderId,
    ProductId,
    Quantity,
    UnitPrice,
}
