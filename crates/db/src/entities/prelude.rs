//! `SeaORM` entity prelude.

pub use super::statements::Entity as Statements;
pub use super::users::Entity as Users;
