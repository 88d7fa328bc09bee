pub mod offer;
pub mod principal;

pub use offer::PostgresOfferRepository;
pub use principal::PostgresPrincipalRepository;
