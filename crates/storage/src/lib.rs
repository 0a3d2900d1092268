pub mod fixtures;
pub mod repository;

pub use repository::{
    InMemoryRepository, KeyValueStore, ResultRepository, Storage, StorageError, TestRepository,
};
