pub mod block;
pub mod component;
pub mod layout;
pub mod template;
