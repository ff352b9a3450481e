pub mod error;
pub use error::EventTypeError;
pub mod path;
pub mod strings;
pub mod types;

pub use path::{get_key_path, get_path, PathSegment};
pub use types::{MetaValue, Metadata};

#[cfg(test)]
mod tests {
    mod error_tests;
}
