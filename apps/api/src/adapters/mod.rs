//! SeaORM adapters. Functions here return `DbErr`; the repos layer maps it
//! to `DomainError`.

pub mod favorites_sea;
pub mod people_sea;
pub mod planets_sea;
pub mod users_sea;
