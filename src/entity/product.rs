//! Product entity.
//!
//! # Database Schema
//!
//! | Column      | Type                  | Description                      |
//! |-------------|-----------------------|----------------------------------|
//! | id          | INTEGER (Primary Key) | Surrogate key                    |
//! | name        | VARCHAR               | Display name                     |
//! | price       | INTEGER               | Smallest currency unit, >= 0     |
//! | description | VARCHAR               | Free text                        |
//!
//! Products relate to orders only through the
//! [`super::order_product_association`] association object, never directly.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub price: i32,
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::order_product_association::Entity")]
    OrderProductAssociation,
}

impl Related<super::order_product_association::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderProductAssociation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
