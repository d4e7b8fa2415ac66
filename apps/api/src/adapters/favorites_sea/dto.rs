//! DTOs for favorites_sea adapter.

/// DTO for inserting a favorite row.
#[derive(Debug, Clone)]
pub struct FavoriteCreate {
    pub user_id: i32,
    pub planet_id: Option<i32>,
    pub people_id: Option<i32>,
}
