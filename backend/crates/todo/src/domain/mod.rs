pub mod entity;
pub mod repository;
pub mod value_object;

pub use entity::todo::Todo;
pub use repository::TodoRepository;
