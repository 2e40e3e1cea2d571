//! Value Object Module

pub mod customer_id;
pub mod identity_id;
pub mod password;
