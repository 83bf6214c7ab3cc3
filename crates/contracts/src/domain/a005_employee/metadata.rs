use crate::shared::metadata::{
    EntityMetadataInfo, EntityUiMetadata, FieldMetadata, FieldRules, InputKind,
};

const DEPARTMENTS: &[&str] = &[
    "Ressources humaines",
    "Comptabilité",
    "Commercial",
    "Marketing",
    "Communication",
    "Juridique",
    "RSE",
    "Informatique",
];

const CONTRACT_TYPES: &[&str] = &[
    "CDI",
    "CDD",
    "Alternance",
    "Stage",
    "Freelance",
];

pub static ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo {
    entity_index: "a005",
    collection_name: "employee",
    storage_key: "employees",
    ui: EntityUiMetadata {
        element_name: "Employé",
        list_name: "Employés",
        icon: "id-card",
    },
};

pub static FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("firstName", "Prénom", InputKind::Text)
        .rules(FieldRules::required())
        .in_list(),
    FieldMetadata::new("lastName", "Nom", InputKind::Text)
        .rules(FieldRules::required())
        .in_list(),
    FieldMetadata::new("email", "E-mail", InputKind::Email)
        .rules(FieldRules::required().email())
        .in_list(),
    FieldMetadata::new("phone", "Téléphone", InputKind::Phone)
        .rules(FieldRules::none().phone()),
    FieldMetadata::new("jobTitle", "Intitulé du poste", InputKind::Text)
        .in_list(),
    FieldMetadata::new("department", "Service", InputKind::Select(DEPARTMENTS))
        .in_list(),
    FieldMetadata::new("contractType", "Type de contrat", InputKind::Select(CONTRACT_TYPES)),
    FieldMetadata::new("hireDate", "Date d'embauche", InputKind::Date),
    FieldMetadata::new("salary", "Salaire brut annuel (€)", InputKind::Number),
];
