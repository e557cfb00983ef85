//! Command implementations.

pub mod add_relation;
pub mod check;
pub mod delete_relation;
pub mod edit_relation;
pub mod person;
pub mod resolve;
pub mod roles;

pub use self::add_relation::execute_add_relation;
pub use self::check::execute_check;
pub use self::delete_relation::execute_delete_relation;
pub use self::edit_relation::execute_edit_relation;
pub use self::person::{execute_add_person, execute_list};
pub use self::resolve::resolve_relationship;
pub use self::roles::execute_roles;
