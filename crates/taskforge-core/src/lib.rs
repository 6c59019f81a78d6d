//! # taskforge-core
//!
//! Domain types and validation rules shared across the taskforge backend:
//!
//! - [`User`] / [`PublicUser`] — registered identities
//! - [`Item`] / [`ItemStatus`] / [`ItemPatch`] — task records and their
//!   lifecycle state
//! - [`validation`] — input rules (title length, page limits)

#![deny(unsafe_code)]

pub mod item;
pub mod user;
pub mod validation;

pub use item::{Item, ItemPatch, ItemStatus};
pub use user::{PublicUser, User};
pub use validation::{
    DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT, MIN_TITLE_LEN, ValidationError, validate_page,
    validate_title,
};
