mod bot;
pub mod commands;
pub mod embeds;

pub use bot::{Data, create_framework};
