pub mod enums;
pub mod sr_exception;
pub mod utils;
