//! Order entity.
//!
//! Orders carry no direct foreign key to products; every order line lives in
//! [`super::order_product_association`].

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub promo_code: Option<String>,
    pub created_at: DateTimeUtc,
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
