pub mod io;
pub mod model;
pub mod parsing;
pub mod registry;
pub mod serialize;
pub mod store;

mod escape;

// Re-export key types for easier usage
pub use io::*;
pub use model::*;
pub use parsing::{block_from_segment, parse_document, scanner::Segment};
pub use registry::BlockRegistry;
pub use serialize::{render_block, serialize_blocks};
pub use store::BlockStore;
