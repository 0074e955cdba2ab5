mod archive_factory;
mod in_memory_session_store;
mod memory_archive;
mod object_store_archive;

pub use archive_factory::ArchiveFactory;
pub use in_memory_session_store::InMemorySessionStore;
pub use memory_archive::MemoryArchive;
pub use object_store_archive::ObjectStoreArchive;
