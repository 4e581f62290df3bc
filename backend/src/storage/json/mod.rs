pub mod child_collection_repository;
pub mod connection;

#[cfg(test)]
pub mod test_utils;

pub use child_collection_repository::JsonChildCollectionRepository;
pub use connection::JsonConnection;
