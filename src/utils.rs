mod basic_auth;
mod increment_u32_id;

pub use basic_auth::basic_auth_encoding;
pub use increment_u32_id::next_tag;
