pub mod offer;
pub mod principal;
