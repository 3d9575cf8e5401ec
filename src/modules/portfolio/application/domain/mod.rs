pub mod defaults;
pub mod entities;
pub mod forms;
