use coa_core_api::{CodeFormatError, HierarchyLevel, BASE_CODE_LEN, SUFFIX_LEN};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const MAX_SEQUENCE: u32 = 10u32.pow(SUFFIX_LEN as u32) - 1;

/// Declared digit widths of the four base-code segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCodeLayout", into = "RawCodeLayout")]
pub struct CodeLayout {
    class_width: usize,
    subclass_width: usize,
    type_width: usize,
    subtype_width: usize,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawCodeLayout {
    class_width: usize,
    subclass_width: usize,
    type_width: usize,
    subtype_width: usize,
}

impl CodeLayout {
    pub fn new(
        class_width: usize,
        subclass_width: usize,
        type_width: usize,
        subtype_width: usize,
    ) -> Result<Self, CodeFormatError> {
        let widths = [class_width, subclass_width, type_width, subtype_width];
        if widths.contains(&0) || widths.iter().sum::<usize>() != BASE_CODE_LEN {
            return Err(CodeFormatError::InvalidLayout {
                widths,
                expected_total: BASE_CODE_LEN,
            });
        }
        Ok(Self {
            class_width,
            subclass_width,
            type_width,
            subtype_width,
        })
    }

    pub fn widths(&self) -> [usize; 4] {
        [
            self.class_width,
            self.subclass_width,
            self.type_width,
            self.subtype_width,
        ]
    }

    /// Concatenate the four hierarchy codes, each zero-padded to its width
    ///
    /// A code that is negative or wider than its segment is rejected instead
    /// of being truncated.
    pub fn base_code(
        &self,
        class_code: i16,
        subclass_code: i16,
        type_code: i16,
        subtype_code: i16,
    ) -> Result<String, CodeFormatError> {
        let mut base = String::with_capacity(BASE_CODE_LEN);
        for (level, code, width) in [
            (HierarchyLevel::Class, class_code, self.class_width),
            (HierarchyLevel::Subclass, subclass_code, self.subclass_width),
            (HierarchyLevel::Type, type_code, self.type_width),
            (HierarchyLevel::Subtype, subtype_code, self.subtype_width),
        ] {
            let digits = code.to_string();
            if code < 0 || digits.len() > width {
                return Err(CodeFormatError::SegmentOverflow {
                    level,
                    code: code as i32,
                    width,
                });
            }
            base.push_str(&format!("{digits:0>width$}"));
        }
        Ok(base)
    }
}

impl Default for CodeLayout {
    fn default() -> Self {
        Self {
            class_width: 1,
            subclass_width: 1,
            type_width: 1,
            subtype_width: 1,
        }
    }
}

impl TryFrom<RawCodeLayout> for CodeLayout {
    type Error = CodeFormatError;

    fn try_from(raw: RawCodeLayout) -> Result<Self, Self::Error> {
        CodeLayout::new(raw.class_width, raw.subclass_width, raw.type_width, raw.subtype_width)
    }
}

impl From<CodeLayout> for RawCodeLayout {
    fn from(layout: CodeLayout) -> Self {
        RawCodeLayout {
            class_width: layout.class_width,
            subclass_width: layout.subclass_width,
            type_width: layout.type_width,
            subtype_width: layout.subtype_width,
        }
    }
}

/// Next free account code under `base_code`
///
/// Takes the lowest unused sequence number starting at 1, so a code freed by
/// deleting an item is handed out again before the range grows. Suffixes that
/// are not numeric count as 0.
pub fn allocate(base_code: &str, used_codes: &HashSet<String>) -> Result<String, CodeFormatError> {
    if base_code.len() != BASE_CODE_LEN || !base_code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CodeFormatError::MalformedBaseCode {
            base_code: base_code.to_string(),
            expected_len: BASE_CODE_LEN,
        });
    }

    let mut taken: Vec<u32> = used_codes
        .iter()
        .filter_map(|code| code.strip_prefix(base_code))
        .map(|suffix| suffix.parse::<u32>().unwrap_or(0))
        .collect();
    taken.sort_unstable();
    taken.dedup();

    let mut next = 1;
    for seq in taken {
        if seq < next {
            continue;
        }
        if seq > next {
            break;
        }
        next += 1;
    }

    if next > MAX_SEQUENCE {
        return Err(CodeFormatError::SequenceExhausted {
            base_code: base_code.to_string(),
        });
    }
    Ok(format!("{base_code}{next:0>width$}", width = SUFFIX_LEN))
}
