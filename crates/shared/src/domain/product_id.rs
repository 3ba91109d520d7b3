use crate::errors::ServiceError;

pub const TYPE_MISMATCH: &str = "Type mismatch.";

/// Parses a raw path or query segment into a product id.
///
/// Anything that is not a base-10 `i32` is a format error, so overflow is
/// reported the same way as `"not-integer"`.
pub fn parse_product_id(raw: &str) -> Result<i32, ServiceError> {
    raw.parse::<i32>()
        .map_err(|_| ServiceError::InvalidFormat(TYPE_MISMATCH.to_string()))
}

/// Product ids are externally supplied and must be strictly positive.
pub fn ensure_valid_product_id(id: i32) -> Result<i32, ServiceError> {
    if id <= 0 {
        return Err(ServiceError::InvalidArgument(format!(
            "invalid productID: {id}"
        )));
    }

    Ok(id)
}

pub fn parse_valid_product_id(raw: &str) -> Result<i32, ServiceError> {
    parse_product_id(raw).and_then(ensure_valid_product_id)
}
