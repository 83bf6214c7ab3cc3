use crate::shared::metadata::{
    EntityMetadataInfo, EntityUiMetadata, FieldMetadata, FieldRules, InputKind,
};

const CONTRACT_KINDS: &[&str] = &[
    "Prestation de services",
    "Partenariat",
    "Confidentialité",
    "Bail",
    "Travail",
    "Autre",
];

const CONTRACT_STATUSES: &[&str] = &[
    "Brouillon",
    "En négociation",
    "Signé",
    "Expiré",
    "Résilié",
];

pub static ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo {
    entity_index: "a008",
    collection_name: "legal_contract",
    storage_key: "contracts",
    ui: EntityUiMetadata {
        element_name: "Contrat",
        list_name: "Contrats",
        icon: "scale",
    },
};

pub static FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("title", "Intitulé", InputKind::Text)
        .rules(FieldRules::required())
        .in_list(),
    FieldMetadata::new("counterparty", "Cocontractant", InputKind::Text)
        .rules(FieldRules::required())
        .in_list(),
    FieldMetadata::new("contractType", "Type", InputKind::Select(CONTRACT_KINDS))
        .in_list(),
    FieldMetadata::new("startDate", "Début", InputKind::Date),
    FieldMetadata::new("endDate", "Fin", InputKind::Date)
        .in_list(),
    FieldMetadata::new("value", "Montant (€)", InputKind::Number),
    FieldMetadata::new("status", "Statut", InputKind::Select(CONTRACT_STATUSES))
        .in_list(),
    FieldMetadata::new("clauses", "Clauses clés", InputKind::Tags)
        .placeholder("Ajouter une clause"),
    FieldMetadata::new("notes", "Notes", InputKind::TextArea),
];
