pub mod registration_dtos;
// alias supaya dapat dipanggil sebagai `crate::dtos::registration`
pub use registration_dtos as registration;
