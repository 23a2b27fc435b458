pub mod constants;
pub mod error_template;
pub mod errors;
pub mod icons;
