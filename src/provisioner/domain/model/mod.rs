pub mod commands;
pub mod entities;
pub mod enums;
pub mod events;
pub mod requests;
pub mod value_objects;
