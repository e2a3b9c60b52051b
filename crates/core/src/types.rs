/// Record ids are caller-supplied 64-bit integers.
pub type DbId = i64;
