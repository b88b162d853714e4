pub mod u001_generate_model;
