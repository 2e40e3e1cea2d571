//! Customer Id Value Object
//!
//! 顧客 ID は呼び出し側が指定する不透明な識別子。
//! 資格情報レコードを一意に特定するキーとして使われる。
//!
//! ## 不変条件
//! - 長さ: 1〜100文字（Unicode コードポイント数）
//! - 正規化・大文字小文字の変換は行わない（入力をそのまま保存・照合）

use derive_more::Display;
use thiserror::Error;

/// Maximum length for customer id (in characters), matches the column width
pub const CUSTOMER_ID_MAX_LENGTH: usize = 100;

/// Customer id validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CustomerIdError {
    #[error("Customer id cannot be empty")]
    Empty,

    #[error("Customer id must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },
}

/// Validated customer identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display("{_0}")]
pub struct CustomerId(String);

impl CustomerId {
    /// Create a new customer id with validation
    pub fn new(raw: impl Into<String>) -> Result<Self, CustomerIdError> {
        let raw = raw.into();
        let char_count = raw.chars().count();

        if char_count == 0 {
            return Err(CustomerIdError::Empty);
        }

        if char_count > CUSTOMER_ID_MAX_LENGTH {
            return Err(CustomerIdError::TooLong {
                max: CUSTOMER_ID_MAX_LENGTH,
                actual: char_count,
            });
        }

        Ok(Self(raw))
    }

    /// Restore from database (already validated on insert)
    pub fn from_db(raw: String) -> Self {
        Self(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
