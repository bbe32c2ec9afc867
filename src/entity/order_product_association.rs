//! Order–product association object.
//!
//! A row means "order O contains quantity Q of product P at unit price U".
//! This is an association *object*, not a bare link table: quantity and
//! unit price are per-link data that must be addressable independently of
//! either parent, so the row has its own surrogate key on top of the two
//! foreign keys.
//!
//! # Database Schema
//!
//! | Column     | Type                  | Description                       |
//! |------------|-----------------------|-----------------------------------|
//! | id         | INTEGER (Primary Key) | Surrogate key                     |
//! | order_id   | INTEGER, FK orders    | Parent order                      |
//! | product_id | INTEGER, FK products  | Parent product                    |
//! | quantity   | INTEGER, default 1    | Units of the product in the order |
//! | unit_price | INTEGER, default 0    | Price per unit at order time      |
//!
//! `(order_id, product_id)` is unique (`index_unique_order_product`): an
//! order cannot list the same product twice, callers update the existing row
//! instead.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "order_product_association_table")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::Id"
    )]
    Order,
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id"
    )]
    Product,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
