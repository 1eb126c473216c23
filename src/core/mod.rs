pub mod name;
pub mod reply;
pub mod todo;
