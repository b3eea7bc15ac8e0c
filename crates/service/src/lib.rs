//! Service layer for the phonebook.
//! - `PersonStore` is the storage contract; memory and SeaORM implementations live side by side.
//! - `PhonebookService` validates input before any store call and logs mutations.
//! - Errors are reported as `ServiceError`, which the HTTP layer maps to status codes.

pub mod errors;
pub mod phonebook;
#[cfg(test)]
pub mod test_support;
