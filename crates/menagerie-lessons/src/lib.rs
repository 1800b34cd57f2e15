//! # menagerie-lessons
//!
//! Companion lessons to the zoo demo. Each module pairs a small set of types
//! with a narrated `demo` that walks through them:
//!
//! - [`account`]: encapsulation and access control with bank accounts
//! - [`kennel`]: reuse through provided trait methods and delegation
//! - [`vector`]: operator overloading on a 2-D vector
//! - [`lineage`]: `+` and `*` with a domain meaning
//! - [`polymorphism`]: one method interface, many implementations
//! - [`duck`]: unrelated types sharing one interface

pub mod account;
pub mod duck;
pub mod kennel;
pub mod lineage;
pub mod polymorphism;
pub mod vector;

pub use account::{BankAccount, SecureAccount, SmartAccount, Transaction};
pub use duck::{make_it_quack, Quacker};
pub use kennel::Companion;
pub use lineage::Pet;
pub use polymorphism::Speaker;
pub use vector::Vector2;
