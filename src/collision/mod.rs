mod overlap;
mod resolver;

pub use overlap::Overlap;
pub use resolver::{resolve_contact, UnresolvedGeometry};
