pub mod base64url;
pub mod time;

pub use base64url::{decode_bytes, decode_segment, encode_bytes, encode_segment};
pub use time::{current_timestamp, format_timestamp, format_timestamp_in};
