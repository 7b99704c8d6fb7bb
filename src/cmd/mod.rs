pub mod calc;
pub mod curve;
pub mod example;
pub mod routes;
pub mod score;
