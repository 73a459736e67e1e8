//! Domain types of the Seller Center API.
//!
//! This module defines the entities built from responses, the enumerated
//! request values and the filter parameters of listing actions.

mod catalog;
mod collection;
mod common;
mod feed;
mod order;
mod product;
mod requests;
mod webhook;

pub use catalog::*;
pub use collection::*;
pub use common::*;
pub use feed::*;
pub use order::*;
pub use product::*;
pub use requests::*;
pub use webhook::*;
