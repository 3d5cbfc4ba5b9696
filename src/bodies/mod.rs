mod dynamic;
mod static_body;

pub use dynamic::DynamicBody;
pub use static_body::StaticBody;
