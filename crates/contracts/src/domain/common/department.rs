use serde::{Deserialize, Serialize};

/// Department of the portal; groups record kinds in the navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    Hr,
    Accounting,
    Commercial,
    Marketing,
    Communication,
    Legal,
    Sustainability,
    It,
}

impl Department {
    pub fn all() -> [Department; 8] {
        [
            Department::Hr,
            Department::Accounting,
            Department::Commercial,
            Department::Marketing,
            Department::Communication,
            Department::Legal,
            Department::Sustainability,
            Department::It,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Department::Hr => "hr",
            Department::Accounting => "accounting",
            Department::Commercial => "commercial",
            Department::Marketing => "marketing",
            Department::Communication => "communication",
            Department::Legal => "legal",
            Department::Sustainability => "sustainability",
            Department::It => "it",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Department::Hr => "Ressources humaines",
            Department::Accounting => "Comptabilité",
            Department::Commercial => "Commercial",
            Department::Marketing => "Marketing",
            Department::Communication => "Communication",
            Department::Legal => "Juridique",
            Department::Sustainability => "RSE",
            Department::It => "Informatique",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Department::Hr => "users",
            Department::Accounting => "dollar-sign",
            Department::Commercial => "briefcase",
            Department::Marketing => "megaphone",
            Department::Communication => "message-square",
            Department::Legal => "scale",
            Department::Sustainability => "leaf",
            Department::It => "monitor",
        }
    }
}
