pub mod common;
pub mod u001_generate_model;
