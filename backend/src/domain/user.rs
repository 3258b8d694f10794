//! User records and their validated fields.
//!
//! Every field that carries an input rule gets its own newtype with a
//! fallible constructor, so a [`UserRecord`] can only ever hold data that
//! already passed validation. Serde parses at the boundary via
//! `try_from = "String"`, which keeps malformed JSON out of the domain.

use std::fmt;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Validation errors raised by the field constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// Name was empty after trimming.
    EmptyName,
    /// Department was empty after trimming.
    EmptyDepartment,
    /// Email did not match the standard address pattern.
    InvalidEmail,
    /// Phone was not 10 to 15 digits with an optional leading `+`.
    InvalidPhone,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::EmptyDepartment => write!(f, "department must not be empty"),
            Self::InvalidEmail => write!(f, "email must be a valid address"),
            Self::InvalidPhone => {
                write!(f, "phone must be 10 to 15 digits with an optional leading +")
            }
        }
    }
}

impl std::error::Error for UserValidationError {}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
static PHONE_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        let pattern = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";
        Regex::new(pattern).unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

fn phone_regex() -> &'static Regex {
    PHONE_RE.get_or_init(|| {
        let pattern = r"^\+?[0-9]{10,15}$";
        Regex::new(pattern).unwrap_or_else(|error| panic!("phone regex failed to compile: {error}"))
    })
}

/// Stable numeric identifier assigned by the record store on creation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier, e.g. one taken from a request path.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// The raw identifier.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display name of a user; non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String")]
#[schema(value_type = String)]
pub struct UserName(String);

impl UserName {
    /// Validate and construct a [`UserName`].
    pub fn new(name: impl Into<String>) -> Result<Self, UserValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        Ok(Self(name))
    }
}

/// Email address matching the standard pattern; unique across the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String")]
#[schema(value_type = String)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`].
    pub fn new(email: impl Into<String>) -> Result<Self, UserValidationError> {
        let email = email.into();
        if !email_regex().is_match(&email) {
            return Err(UserValidationError::InvalidEmail);
        }
        Ok(Self(email))
    }

    /// Lower-cased form used for uniqueness comparisons.
    pub fn comparison_key(&self) -> String {
        self.0.to_lowercase()
    }
}

/// Phone number: optional leading `+`, then 10 to 15 digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String")]
#[schema(value_type = String)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Validate and construct a [`PhoneNumber`].
    pub fn new(phone: impl Into<String>) -> Result<Self, UserValidationError> {
        let phone = phone.into();
        if !phone_regex().is_match(&phone) {
            return Err(UserValidationError::InvalidPhone);
        }
        Ok(Self(phone))
    }
}

/// Department a user belongs to; non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String")]
#[schema(value_type = String)]
pub struct Department(String);

impl Department {
    /// Validate and construct a [`Department`].
    pub fn new(department: impl Into<String>) -> Result<Self, UserValidationError> {
        let department = department.into();
        if department.trim().is_empty() {
            return Err(UserValidationError::EmptyDepartment);
        }
        Ok(Self(department))
    }
}

macro_rules! string_newtype_conversions {
    ($($ty:ident),* $(,)?) => {
        $(
            impl AsRef<str> for $ty {
                fn as_ref(&self) -> &str {
                    self.0.as_str()
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_ref())
                }
            }

            impl From<$ty> for String {
                fn from(value: $ty) -> Self {
                    value.0
                }
            }

            impl TryFrom<String> for $ty {
                type Error = UserValidationError;

                fn try_from(value: String) -> Result<Self, Self::Error> {
                    Self::new(value)
                }
            }
        )*
    };
}

string_newtype_conversions!(UserName, EmailAddress, PhoneNumber, Department);

/// Validated create/update payload: everything on a record except the
/// identifier and the store-owned timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    /// Display name.
    pub name: UserName,
    /// Unique email address.
    pub email: EmailAddress,
    /// Contact phone number.
    pub phone: PhoneNumber,
    /// Department label.
    pub department: Department,
    /// Whether the user is active.
    pub active: bool,
}

impl UserDraft {
    /// Assemble a draft from already-validated fields.
    pub const fn new(
        name: UserName,
        email: EmailAddress,
        phone: PhoneNumber,
        department: Department,
        active: bool,
    ) -> Self {
        Self {
            name,
            email,
            phone,
            department,
            active,
        }
    }

    /// Validate raw field values and assemble a draft.
    ///
    /// The first failing field wins; adapters attach the field name when
    /// mapping the error.
    pub fn try_from_parts(
        name: &str,
        email: &str,
        phone: &str,
        department: &str,
        active: bool,
    ) -> Result<Self, UserValidationError> {
        Ok(Self {
            name: UserName::new(name)?,
            email: EmailAddress::new(email)?,
            phone: PhoneNumber::new(phone)?,
            department: Department::new(department)?,
            active,
        })
    }
}

/// A user record as held by the record store.
///
/// Serialises camelCase to match the JSON wire shape of the REST API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Identifier assigned on creation, immutable thereafter.
    #[schema(example = 1)]
    pub id: UserId,
    /// Display name.
    #[schema(example = "Ada Lovelace")]
    pub name: UserName,
    /// Unique email address.
    #[schema(example = "ada@example.com")]
    pub email: EmailAddress,
    /// Contact phone number.
    #[schema(example = "0812345678901")]
    pub phone: PhoneNumber,
    /// Department label.
    #[schema(example = "Technology")]
    pub department: Department,
    /// Whether the user is active.
    pub active: bool,
    /// Set by the store when the record is created.
    pub created_at: DateTime<Utc>,
    /// Set by the store on every mutation.
    pub updated_at: DateTime<Utc>,
}

impl UserRecord {
    /// Materialise a freshly created record from a draft.
    pub fn from_draft(id: UserId, draft: UserDraft, at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            department: draft.department,
            active: draft.active,
            created_at: at,
            updated_at: at,
        }
    }

    /// Overwrite the mutable fields from a draft, refreshing `updated_at`.
    pub fn apply(&mut self, draft: UserDraft, at: DateTime<Utc>) {
        self.name = draft.name;
        self.email = draft.email;
        self.phone = draft.phone;
        self.department = draft.department;
        self.active = draft.active;
        self.updated_at = at;
    }
}

impl listview::DirectoryEntry for UserRecord {
    fn id(&self) -> i64 {
        self.id.get()
    }

    fn name(&self) -> &str {
        self.name.as_ref()
    }

    fn active(&self) -> bool {
        self.active
    }
}
