mod cache;
mod rotation;

pub use cache::CacheStore;
pub use rotation::RotationCursor;
pub use rotation::next_index;
