pub mod submit_services;
