pub mod chat;
pub mod create;
pub mod login;
