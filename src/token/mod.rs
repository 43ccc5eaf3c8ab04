mod decoded;
mod header;
mod split;

pub use decoded::{DecodedJwt, decode, encode};
pub use header::TokenHeader;
pub use split::{RawSegments, split_token};
