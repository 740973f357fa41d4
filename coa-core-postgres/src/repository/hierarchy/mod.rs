pub mod account_class_repository;
pub mod account_subclass_repository;
pub mod account_subtype_repository;
pub mod account_type_repository;

pub use account_class_repository::AccountClassRepositoryImpl;
pub use account_subclass_repository::AccountSubclassRepositoryImpl;
pub use account_subtype_repository::AccountSubtypeRepositoryImpl;
pub use account_type_repository::AccountTypeRepositoryImpl;
