pub mod client;
pub mod config;
pub mod dialog;
pub mod domain;
pub mod helpers;
pub mod http;
pub mod picker;
pub mod repository;
