//! Persistence layer for posts: schema changes, the record mapping for
//! posts with renamed timestamp columns, and services over both tables.

pub mod config;
pub mod post;
pub mod schema;
pub mod stamped;
