pub mod batch;
pub mod config;
pub mod crop;
pub mod info;
