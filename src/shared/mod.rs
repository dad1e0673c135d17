pub mod constants;
pub mod scoring;
pub mod test_helpers;
pub mod types;
pub mod validation;
