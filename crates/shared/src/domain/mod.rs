mod product_id;

pub use self::product_id::{
    TYPE_MISMATCH, ensure_valid_product_id, parse_product_id, parse_valid_product_id,
};
