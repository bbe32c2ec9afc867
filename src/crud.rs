//! CRUD procedures over the order/product schema.
//!
//! Every function takes a connection and commits on its own; there is no
//! cross-call transaction, so multi-step flows are not atomic as a unit.
//! Persistence errors are translated into domain errors here rather than
//! leaking storage-layer detail to callers.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    LoaderTrait, QueryFilter, QueryOrder, Set, SqlErr,
};
use tracing::debug;

use crate::entity::{order, order_product_association, product};
use crate::error::{Error, Result};

/// One order line: the association row plus its resolved product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub association: order_product_association::Model,
    pub product: product::Model,
}

/// An order with all of its lines eagerly loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderWithProducts {
    pub order: order::Model,
    pub items: Vec<OrderLine>,
}

/// Inserts a new order, optionally carrying a promo code.
pub async fn create_order(
    db: &DatabaseConnection,
    promo_code: Option<&str>,
) -> Result<order::Model> {
    let order = order::ActiveModel {
        promo_code: Set(promo_code.map(str::to_string)),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    debug!(order_id = order.id, "created order");
    Ok(order)
}

/// Inserts a new product.
///
/// Price is in minor currency units and must not be negative; zero is
/// allowed (gift products).
pub async fn create_product(
    db: &DatabaseConnection,
    name: &str,
    description: &str,
    price: i32,
) -> Result<product::Model> {
    if price < 0 {
        return Err(Error::NegativePrice(price));
    }

    let product = product::ActiveModel {
        name: Set(name.to_string()),
        description: Set(description.to_string()),
        price: Set(price),
        ..Default::default()
    }
    .insert(db)
    .await?;

    debug!(product_id = product.id, name, "created product");
    Ok(product)
}

/// Links a product into an order with the given per-link quantity and unit
/// price.
///
/// A second attach of the same `(order, product)` pair fails with
/// [`Error::ConstraintViolation`], surfaced from the unique index. Callers
/// wanting "increase quantity" semantics use [`update_attachment`] instead.
pub async fn attach_product(
    db: &DatabaseConnection,
    order: &order::Model,
    product: &product::Model,
    quantity: i32,
    unit_price: i32,
) -> Result<order_product_association::Model> {
    let attempt = order_product_association::ActiveModel {
        order_id: Set(order.id),
        product_id: Set(product.id),
        quantity: Set(quantity),
        unit_price: Set(unit_price),
        ..Default::default()
    }
    .insert(db)
    .await;

    match attempt {
        Ok(association) => Ok(association),
        Err(e) => match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                Err(Error::ConstraintViolation("order already contains product"))
            }
            _ => Err(Error::Database(e)),
        },
    }
}

/// Rewrites the quantity and unit price of an existing order line.
///
/// This is the explicit update path for the pair the unique constraint
/// protects; an absent pair fails [`Error::NotFound`].
pub async fn update_attachment(
    db: &DatabaseConnection,
    order_id: i32,
    product_id: i32,
    quantity: i32,
    unit_price: i32,
) -> Result<order_product_association::Model> {
    let existing = order_product_association::Entity::find()
        .filter(order_product_association::Column::OrderId.eq(order_id))
        .filter(order_product_association::Column::ProductId.eq(product_id))
        .one(db)
        .await?
        .ok_or(Error::NotFound("association"))?;

    let mut association = existing.into_active_model();
    association.quantity = Set(quantity);
    association.unit_price = Set(unit_price);
    Ok(association.update(db).await?)
}

/// All orders by ascending id, each with its association rows and each
/// association's product.
///
/// Two-level eager loading: one batched query for the association rows of
/// every order, one for the products of every association — at most two
/// extra round-trips regardless of order count, instead of one per order
/// plus one per row.
pub async fn list_orders_with_products(db: &DatabaseConnection) -> Result<Vec<OrderWithProducts>> {
    let orders = order::Entity::find()
        .order_by_asc(order::Column::Id)
        .all(db)
        .await?;

    let groups = orders
        .load_many(order_product_association::Entity, db)
        .await?;

    let flat: Vec<order_product_association::Model> =
        groups.iter().flatten().cloned().collect();
    let mut products = flat.load_one(product::Entity, db).await?.into_iter();

    let mut result = Vec::with_capacity(orders.len());
    for (order, group) in orders.into_iter().zip(groups) {
        let mut items = Vec::with_capacity(group.len());
        for association in group {
            // A missing product would mean a dangling foreign key.
            let product = products.next().flatten().ok_or_else(|| {
                Error::Database(DbErr::RecordNotFound(format!(
                    "product {} referenced by association {}",
                    association.product_id, association.id
                )))
            })?;
            items.push(OrderLine {
                association,
                product,
            });
        }
        result.push(OrderWithProducts { order, items });
    }

    Ok(result)
}

/// Demo flow: creates a zero-priced gift product and attaches one unit of it
/// to every existing order. The product is freshly inserted, so no order can
/// already contain it.
pub async fn attach_gift_product(db: &DatabaseConnection) -> Result<product::Model> {
    let gift = create_product(db, "Gift Product", "Gift for you!!", 0).await?;

    let orders = order::Entity::find().all(db).await?;
    for order in &orders {
        attach_product(db, order, &gift, 1, 0).await?;
    }

    Ok(gift)
}
