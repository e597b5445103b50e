mod in_memory_page_repository;

pub use in_memory_page_repository::InMemoryPageRepository;
