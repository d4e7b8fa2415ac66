//! DTOs for users_sea adapter.

/// DTO for creating a new user (seeding and admin tooling only).
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub email: String,
    pub password: String,
    pub is_active: bool,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UserCreate {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            is_active: true,
            first_name: None,
            last_name: None,
        }
    }

    pub fn with_names(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self.last_name = Some(last_name.into());
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}
