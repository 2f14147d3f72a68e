mod header;
mod typed;

pub use header::TokenHeader;
pub use typed::TypedToken;
