//! Route modules for the S3 gateway

pub mod buckets;
pub mod health;
pub mod objects;
