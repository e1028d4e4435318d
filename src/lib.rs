pub mod command;
pub mod config;
pub mod data;
pub mod error;
pub mod host;
pub mod model;
pub mod service;
pub mod startup;
pub mod util;
