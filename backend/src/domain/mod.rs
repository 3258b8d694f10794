//! Domain types and use-cases.
//!
//! Strongly typed user records with validation at construction, the domain
//! error payload shared by every adapter, and the directory service that
//! implements the driving ports over a record store.

pub mod directory;
pub mod error;
pub mod ports;
pub mod user;

pub use self::directory::DirectoryService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::user::{
    Department, EmailAddress, PhoneNumber, UserDraft, UserId, UserName, UserRecord,
    UserValidationError,
};
