use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CodeFormatError;

/// Length of the class/subclass/type/subtype prefix
pub const BASE_CODE_LEN: usize = 4;
/// Length of the sequence suffix appended to a base code
pub const SUFFIX_LEN: usize = 2;
pub const ACCOUNT_CODE_LEN: usize = BASE_CODE_LEN + SUFFIX_LEN;

/// A six digit account code: base code followed by a two digit sequence
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountCode(HeaplessString<ACCOUNT_CODE_LEN>);

impl AccountCode {
    pub fn parse(code: &str) -> Result<Self, CodeFormatError> {
        if code.len() != ACCOUNT_CODE_LEN || !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CodeFormatError::MalformedAccountCode {
                code: code.to_string(),
            });
        }
        HeaplessString::try_from(code)
            .map(AccountCode)
            .map_err(|_| CodeFormatError::MalformedAccountCode {
                code: code.to_string(),
            })
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn base_code(&self) -> &str {
        &self.as_str()[..BASE_CODE_LEN]
    }

    pub fn sequence(&self) -> u8 {
        // Both digits were checked in parse
        self.as_str()[BASE_CODE_LEN..].parse().unwrap_or(0)
    }
}

impl fmt::Display for AccountCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for AccountCode {
    type Error = CodeFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        AccountCode::parse(&value)
    }
}

impl From<AccountCode> for String {
    fn from(code: AccountCode) -> Self {
        code.as_str().to_string()
    }
}
