pub mod derive;
pub mod routes;
