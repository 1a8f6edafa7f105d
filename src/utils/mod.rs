pub mod index_type;

pub use index_type::IndexType;
