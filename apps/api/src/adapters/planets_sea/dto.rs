//! DTOs for planets_sea adapter.

/// DTO for inserting a planet. Every column is nullable.
#[derive(Debug, Clone, Default)]
pub struct PlanetCreate {
    pub name: Option<String>,
    pub climate: Option<String>,
    pub population: Option<String>,
}

/// DTO for overwriting all mutable columns of an existing planet.
#[derive(Debug, Clone)]
pub struct PlanetUpdate {
    pub id: i32,
    pub name: Option<String>,
    pub climate: Option<String>,
    pub population: Option<String>,
}
