use crate::domain::{entities::ProjectStructure, error::DomainError};

/// Checks run on a built structure before any filesystem work.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_project_structure(structure: &ProjectStructure) -> Result<(), DomainError> {
        structure.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_structure_is_rejected() {
        let structure = ProjectStructure::new("/tmp/empty");
        assert_eq!(
            DomainValidator::validate_project_structure(&structure),
            Err(DomainError::EmptyStructure)
        );
    }

    #[test]
    fn single_file_structure_is_accepted() {
        let structure =
            ProjectStructure::new("/tmp/one").with_file("package.json", "{}\n".to_string());
        assert!(DomainValidator::validate_project_structure(&structure).is_ok());
    }
}
