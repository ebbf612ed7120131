//! Network boundary: the login endpoint client and its wire types.

pub mod api;
pub mod types;
