use crate::shared::metadata::{
    EntityMetadataInfo, EntityUiMetadata, FieldMetadata, FieldRules, InputKind,
};

const INVOICE_STATUSES: &[&str] = &[
    "Brouillon",
    "Envoyée",
    "Payée",
    "En retard",
    "Annulée",
];

pub static ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo {
    entity_index: "a006",
    collection_name: "invoice",
    storage_key: "invoices",
    ui: EntityUiMetadata {
        element_name: "Facture",
        list_name: "Factures",
        icon: "file-text",
    },
};

pub static FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("number", "Numéro", InputKind::Text)
        .rules(FieldRules::required())
        .in_list()
        .placeholder("FA-2024-001"),
    FieldMetadata::new("client", "Client", InputKind::Text)
        .rules(FieldRules::required())
        .in_list(),
    FieldMetadata::new("amount", "Montant TTC (€)", InputKind::Number)
        .rules(FieldRules::required())
        .in_list(),
    FieldMetadata::new("issueDate", "Date d'émission", InputKind::Date)
        .in_list(),
    FieldMetadata::new("dueDate", "Échéance", InputKind::Date),
    FieldMetadata::new("status", "Statut", InputKind::Select(INVOICE_STATUSES))
        .in_list(),
    FieldMetadata::new("notes", "Notes", InputKind::TextArea),
];
