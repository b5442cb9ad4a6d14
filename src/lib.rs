pub mod bot;
pub mod chat;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod intent;
pub mod keepalive;
pub mod keywords;
pub mod messages;

pub use bot::run;
