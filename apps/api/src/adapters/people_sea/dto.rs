//! DTOs for people_sea adapter.

#[derive(Debug, Clone, Default)]
pub struct PersonCreate {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub height: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PersonUpdate {
    pub id: i32,
    pub name: Option<String>,
    pub gender: Option<String>,
    pub height: Option<String>,
}
