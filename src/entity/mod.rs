//! Sea-ORM entity definitions for the relational schema.
//!
//! Six entities: [`user`], [`profile`] (one-to-one with user; its table only
//! exists mid-migration-history), [`post`] (one-to-many from user),
//! [`product`], [`order`], and the [`order_product_association`] association
//! object that links orders and products while carrying per-link quantity
//! and unit price.

pub mod order;
pub mod order_product_association;
pub mod post;
pub mod product;
pub mod profile;
pub mod user;
