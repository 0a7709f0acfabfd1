pub mod string_column;
pub mod serializer;
