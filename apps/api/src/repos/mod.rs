//! Persistence contract for the domain layer (generic over `ConnectionTrait`).

pub mod favorites;
pub mod people;
pub mod planets;
pub mod users;
