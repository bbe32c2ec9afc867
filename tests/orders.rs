//! Integration tests for the order/product CRUD procedures, run against an
//! in-memory sqlite database with the full migration chain applied.

use sea_orm::{Database, DatabaseConnection, EntityTrait};
use sea_orm_migration::MigratorTrait;
use web_auth_demo::entity::{order_product_association, product};
use web_auth_demo::migration::Migrator;
use web_auth_demo::{crud, Error};

async fn setup() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

#[tokio::test]
async fn create_order_with_and_without_promo_code() {
    let db = setup().await;

    let plain = crud::create_order(&db, None).await.unwrap();
    let promo = crud::create_order(&db, Some("promo")).await.unwrap();

    assert_eq!(plain.promo_code, None);
    assert_eq!(promo.promo_code.as_deref(), Some("promo"));
    assert!(promo.id > plain.id);
}

#[tokio::test]
async fn negative_price_is_rejected_and_zero_is_allowed() {
    let db = setup().await;

    let err = crud::create_product(&db, "Broken", "negative", -1)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NegativePrice(-1)));

    let gift = crud::create_product(&db, "Gift Product", "Gift for you!!", 0)
        .await
        .unwrap();
    assert_eq!(gift.price, 0);
}

#[tokio::test]
async fn duplicate_attach_is_a_constraint_violation() {
    let db = setup().await;

    let order = crud::create_order(&db, None).await.unwrap();
    let phone = crud::create_product(&db, "Iphone 16", "Best for photos", 999)
        .await
        .unwrap();

    crud::attach_product(&db, &order, &phone, 1, 999).await.unwrap();
    let err = crud::attach_product(&db, &order, &phone, 2, 999)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::ConstraintViolation(_)));

    // The explicit update path is how quantity changes.
    let updated = crud::update_attachment(&db, order.id, phone.id, 3, 899)
        .await
        .unwrap();
    assert_eq!(updated.quantity, 3);
    assert_eq!(updated.unit_price, 899);
}

#[tokio::test]
async fn update_attachment_of_unknown_pair_is_not_found() {
    let db = setup().await;
    let err = crud::update_attachment(&db, 1, 1, 1, 0).await.unwrap_err();
    assert!(matches!(err, Error::NotFound("association")));
}

#[tokio::test]
async fn iphone_scenario_lists_one_order_with_one_line() {
    let db = setup().await;

    let order = crud::create_order(&db, None).await.unwrap();
    let phone = crud::create_product(&db, "Iphone 16", "Best for photos", 999)
        .await
        .unwrap();
    crud::attach_product(&db, &order, &phone, 1, 999).await.unwrap();

    let listing = crud::list_orders_with_products(&db).await.unwrap();
    assert_eq!(listing.len(), 1);

    let entry = &listing[0];
    assert_eq!(entry.order.id, order.id);
    assert_eq!(entry.order.promo_code, None);
    assert_eq!(entry.items.len(), 1);

    let line = &entry.items[0];
    assert_eq!(line.product.name, "Iphone 16");
    assert_eq!(line.product.price, 999);
    assert_eq!(line.association.quantity, 1);
    assert_eq!(line.association.unit_price, 999);
}

#[tokio::test]
async fn listing_returns_each_order_with_exactly_its_lines_in_id_order() {
    let db = setup().await;

    let order1 = crud::create_order(&db, None).await.unwrap();
    let order2 = crud::create_order(&db, Some("promo")).await.unwrap();
    let order3 = crud::create_order(&db, None).await.unwrap();

    let phone = crud::create_product(&db, "Iphone 16", "Best for photos", 999)
        .await
        .unwrap();
    let samsung = crud::create_product(&db, "Samsung S24", "Best for his price", 700)
        .await
        .unwrap();

    crud::attach_product(&db, &order1, &samsung, 1, 700).await.unwrap();
    crud::attach_product(&db, &order2, &samsung, 2, 650).await.unwrap();
    crud::attach_product(&db, &order2, &phone, 1, 999).await.unwrap();

    let listing = crud::list_orders_with_products(&db).await.unwrap();
    assert_eq!(listing.len(), 3);
    assert_eq!(
        listing.iter().map(|e| e.order.id).collect::<Vec<_>>(),
        vec![order1.id, order2.id, order3.id]
    );

    assert_eq!(listing[0].items.len(), 1);
    assert_eq!(listing[0].items[0].product.name, "Samsung S24");

    let order2_lines = &listing[1].items;
    assert_eq!(order2_lines.len(), 2);
    let samsung_line = order2_lines
        .iter()
        .find(|line| line.product.id == samsung.id)
        .unwrap();
    assert_eq!(samsung_line.association.quantity, 2);
    assert_eq!(samsung_line.association.unit_price, 650);

    assert!(listing[2].items.is_empty());
}

#[tokio::test]
async fn gift_product_is_attached_to_every_order() {
    let db = setup().await;

    crud::create_order(&db, None).await.unwrap();
    crud::create_order(&db, Some("promo")).await.unwrap();

    let gift = crud::attach_gift_product(&db).await.unwrap();
    assert_eq!(gift.price, 0);

    for entry in crud::list_orders_with_products(&db).await.unwrap() {
        let line = entry
            .items
            .iter()
            .find(|line| line.product.id == gift.id)
            .unwrap();
        assert_eq!(line.association.quantity, 1);
        assert_eq!(line.association.unit_price, 0);
    }
}

#[tokio::test]
async fn deleting_a_referenced_product_is_restricted() {
    let db = setup().await;

    let order = crud::create_order(&db, None).await.unwrap();
    let phone = crud::create_product(&db, "Iphone 16", "Best for photos", 999)
        .await
        .unwrap();
    crud::attach_product(&db, &order, &phone, 1, 999).await.unwrap();

    // No cascade rule: the association row keeps its parents alive.
    assert!(product::Entity::delete_by_id(phone.id).exec(&db).await.is_err());

    // Detach first, then the delete goes through.
    order_product_association::Entity::delete_many()
        .exec(&db)
        .await
        .unwrap();
    product::Entity::delete_by_id(phone.id)
        .exec(&db)
        .await
        .unwrap();
}
