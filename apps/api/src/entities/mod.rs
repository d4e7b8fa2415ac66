pub mod favorites;
pub mod people;
pub mod planets;
pub mod users;

pub use favorites::Entity as Favorites;
pub use favorites::Model as Favorite;
pub use people::Entity as People;
pub use people::Model as Person;
pub use planets::Entity as Planets;
pub use planets::Model as Planet;
pub use users::Entity as Users;
pub use users::Model as User;
