pub mod constants;
pub mod flash;
pub mod redirect;
pub mod test_helpers;
pub mod types;
pub mod validation;
