use super::department::Department;
use crate::domain::{
    a001_lead, a002_candidate, a003_applicant, a004_member, a005_employee, a006_invoice,
    a007_campaign, a008_legal_contract, a009_affiliate, a010_initiative, a011_it_ticket,
};
use crate::shared::metadata::{EntityMetadataInfo, FieldMetadata};
use serde::{Deserialize, Serialize};

/// Discriminant over every record kind of the portal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Lead,
    Candidate,
    Applicant,
    Member,
    Employee,
    Invoice,
    Campaign,
    LegalContract,
    Affiliate,
    Initiative,
    ItTicket,
}

impl RecordKind {
    pub fn all() -> [RecordKind; 11] {
        [
            RecordKind::Lead,
            RecordKind::Candidate,
            RecordKind::Applicant,
            RecordKind::Member,
            RecordKind::Employee,
            RecordKind::Invoice,
            RecordKind::Campaign,
            RecordKind::LegalContract,
            RecordKind::Affiliate,
            RecordKind::Initiative,
            RecordKind::ItTicket,
        ]
    }

    pub fn metadata(&self) -> &'static EntityMetadataInfo {
        match self {
            RecordKind::Lead => &a001_lead::ENTITY_METADATA,
            RecordKind::Candidate => &a002_candidate::ENTITY_METADATA,
            RecordKind::Applicant => &a003_applicant::ENTITY_METADATA,
            RecordKind::Member => &a004_member::ENTITY_METADATA,
            RecordKind::Employee => &a005_employee::ENTITY_METADATA,
            RecordKind::Invoice => &a006_invoice::ENTITY_METADATA,
            RecordKind::Campaign => &a007_campaign::ENTITY_METADATA,
            RecordKind::LegalContract => &a008_legal_contract::ENTITY_METADATA,
            RecordKind::Affiliate => &a009_affiliate::ENTITY_METADATA,
            RecordKind::Initiative => &a010_initiative::ENTITY_METADATA,
            RecordKind::ItTicket => &a011_it_ticket::ENTITY_METADATA,
        }
    }

    pub fn fields(&self) -> &'static [FieldMetadata] {
        match self {
            RecordKind::Lead => a001_lead::FIELDS,
            RecordKind::Candidate => a002_candidate::FIELDS,
            RecordKind::Applicant => a003_applicant::FIELDS,
            RecordKind::Member => a004_member::FIELDS,
            RecordKind::Employee => a005_employee::FIELDS,
            RecordKind::Invoice => a006_invoice::FIELDS,
            RecordKind::Campaign => a007_campaign::FIELDS,
            RecordKind::LegalContract => a008_legal_contract::FIELDS,
            RecordKind::Affiliate => a009_affiliate::FIELDS,
            RecordKind::Initiative => a010_initiative::FIELDS,
            RecordKind::ItTicket => a011_it_ticket::FIELDS,
        }
    }

    pub fn department(&self) -> Department {
        match self {
            RecordKind::Candidate | RecordKind::Applicant | RecordKind::Employee => Department::Hr,
            RecordKind::Invoice => Department::Accounting,
            RecordKind::Lead | RecordKind::Affiliate => Department::Commercial,
            RecordKind::Campaign => Department::Marketing,
            RecordKind::Member => Department::Communication,
            RecordKind::LegalContract => Department::Legal,
            RecordKind::Initiative => Department::Sustainability,
            RecordKind::ItTicket => Department::It,
        }
    }

    /// Storage key of the persisted record list
    pub fn storage_key(&self) -> &'static str {
        self.metadata().storage_key
    }

    /// Tab key, e.g. "a004_member"
    pub fn full_name(&self) -> String {
        self.metadata().full_name()
    }

    pub fn list_name(&self) -> &'static str {
        self.metadata().ui.list_name
    }

    pub fn from_full_name(key: &str) -> Option<RecordKind> {
        Self::all().into_iter().find(|kind| kind.full_name() == key)
    }

    pub fn of_department(department: Department) -> Vec<RecordKind> {
        Self::all()
            .into_iter()
            .filter(|kind| kind.department() == department)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_storage_keys_are_unique_and_stable() {
        let keys: HashSet<&str> = RecordKind::all().iter().map(|k| k.storage_key()).collect();
        assert_eq!(keys.len(), RecordKind::all().len());
        assert_eq!(RecordKind::Member.storage_key(), "members");
        assert_eq!(RecordKind::Candidate.storage_key(), "candidats");
        assert_eq!(RecordKind::Applicant.storage_key(), "candidates");
    }

    #[test]
    fn test_full_name_round_trip() {
        for kind in RecordKind::all() {
            assert_eq!(RecordKind::from_full_name(&kind.full_name()), Some(kind));
        }
        assert_eq!(RecordKind::from_full_name("a999_unknown"), None);
    }

    #[test]
    fn test_every_department_has_a_kind() {
        for department in Department::all() {
            assert!(!RecordKind::of_department(department).is_empty());
        }
    }

    #[test]
    fn test_every_kind_has_a_list_field() {
        for kind in RecordKind::all() {
            assert!(kind.fields().iter().any(|f| f.visible_in_list()), "{:?}", kind);
        }
    }
}
