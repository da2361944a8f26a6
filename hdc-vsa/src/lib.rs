pub mod config;
pub mod error;
pub mod hypervector;
pub mod item_memory;
pub mod rng;

#[cfg(feature = "python")]
pub mod py_bindings;

pub use config::{MemoryConfig, DEFAULT_DIMENSIONS, DEFAULT_SEED};
pub use error::{HdcError, HdcResult};
pub use hypervector::{
    generate_vector, random_binary_vector, random_binary_vector_from_seed, Hypervector,
};
pub use item_memory::{generate_item_memory, random_item_memory, ItemMemory};
pub use rng::seeded_stream;
