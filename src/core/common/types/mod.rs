pub mod metadata;
pub mod value;

pub use metadata::Metadata;
pub use value::MetaValue;
