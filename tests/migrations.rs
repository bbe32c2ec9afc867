//! Migration-history tests: the profiles table exists mid-chain and is gone
//! once the full chain has run, mirroring the source schema history.

use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, EntityTrait, ModelTrait, Set};
use sea_orm_migration::MigratorTrait;
use web_auth_demo::entity::{post, profile, user};
use web_auth_demo::migration::Migrator;

async fn connect() -> DatabaseConnection {
    Database::connect("sqlite::memory:").await.unwrap()
}

async fn create_user(db: &DatabaseConnection, username: &str) -> user::Model {
    user::ActiveModel {
        username: Set(username.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

#[tokio::test]
async fn profiles_work_before_the_drop_migration() {
    let db = connect().await;
    // Everything up to, but not including, the profile drop.
    Migrator::up(&db, Some(3)).await.unwrap();

    let john = create_user(&db, "john").await;
    let profile = profile::ActiveModel {
        user_id: Set(john.id),
        first_name: Set(Some("John".to_string())),
        last_name: Set(None),
        ..Default::default()
    }
    .insert(&db)
    .await
    .unwrap();

    let loaded = john
        .find_related(profile::Entity)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(loaded.id, profile.id);
    assert_eq!(loaded.first_name.as_deref(), Some("John"));
}

#[tokio::test]
async fn one_profile_per_user_is_enforced() {
    let db = connect().await;
    Migrator::up(&db, Some(3)).await.unwrap();

    let john = create_user(&db, "john").await;
    let make_profile = |first: &str| profile::ActiveModel {
        user_id: Set(john.id),
        first_name: Set(Some(first.to_string())),
        last_name: Set(None),
        ..Default::default()
    };

    make_profile("John").insert(&db).await.unwrap();
    assert!(make_profile("Johnny").insert(&db).await.is_err());
}

#[tokio::test]
async fn profiles_are_gone_after_the_full_chain() {
    let db = connect().await;
    Migrator::up(&db, Some(3)).await.unwrap();

    let john = create_user(&db, "john").await;
    profile::ActiveModel {
        user_id: Set(john.id),
        first_name: Set(Some("John".to_string())),
        last_name: Set(None),
        ..Default::default()
    }
    .insert(&db)
    .await
    .unwrap();

    // Apply the remaining migration: drop profiles.
    Migrator::up(&db, None).await.unwrap();

    assert!(profile::Entity::find().all(&db).await.is_err());
}

#[tokio::test]
async fn users_keep_their_posts() {
    let db = connect().await;
    Migrator::up(&db, None).await.unwrap();

    let john = create_user(&db, "john").await;
    let sam = create_user(&db, "sam").await;

    for title in ["SQLA 2.0", "SQLA Joins"] {
        post::ActiveModel {
            user_id: Set(john.id),
            title: Set(title.to_string()),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();
    }

    let johns_posts = john.find_related(post::Entity).all(&db).await.unwrap();
    assert_eq!(johns_posts.len(), 2);
    assert!(sam.find_related(post::Entity).all(&db).await.unwrap().is_empty());
}

#[tokio::test]
async fn usernames_are_unique() {
    let db = connect().await;
    Migrator::up(&db, None).await.unwrap();

    create_user(&db, "john").await;
    let duplicate = user::ActiveModel {
        username: Set("john".to_string()),
        ..Default::default()
    }
    .insert(&db)
    .await;
    assert!(duplicate.is_err());
}
