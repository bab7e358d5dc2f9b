//! Stateless helpers: pure functions over entity views and plain strings.
//! No shared state; callers inject the clock where a predicate needs one.

pub mod code;
pub mod image;
pub mod item;
pub mod order;
pub mod reservation;
pub mod user;
