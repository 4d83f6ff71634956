//! Verification code generation

use uuid::Uuid;

use crate::errors::GeneratorError;
use super::traits::CodeGenerator;

/// Generates random UUID v4 codes in hyphenated lowercase form
///
/// 122 random bits per code, so collisions across issuances and restarts are
/// not a practical concern. Holds no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidCodeGenerator;

impl UuidCodeGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl CodeGenerator for UuidCodeGenerator {
    fn new_code(&self) -> Result<String, GeneratorError> {
        Ok(Uuid::new_v4().to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_codes_are_hyphenated_uuid_v4() {
        let code = UuidCodeGenerator::new().new_code().unwrap();
        assert_eq!(code.len(), 36);
        let parsed = Uuid::parse_str(&code).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(code, code.to_lowercase());
    }

    #[test]
    fn test_codes_do_not_repeat() {
        let generator = UuidCodeGenerator::new();
        let codes: HashSet<String> = (0..1000)
            .map(|_| generator.new_code().unwrap())
            .collect();
        assert_eq!(codes.len(), 1000);
    }
}
