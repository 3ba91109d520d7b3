mod json;
mod validate;

pub use self::json::JsonBody;
pub use self::validate::format_validation_errors;
