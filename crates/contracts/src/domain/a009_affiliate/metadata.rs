use crate::shared::metadata::{
    EntityMetadataInfo, EntityUiMetadata, FieldMetadata, FieldRules, InputKind,
};

const AFFILIATE_STATUSES: &[&str] = &[
    "Actif",
    "En attente",
    "Suspendu",
];

pub static ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo {
    entity_index: "a009",
    collection_name: "affiliate",
    storage_key: "affiliates",
    ui: EntityUiMetadata {
        element_name: "Affilié",
        list_name: "Affiliés",
        icon: "link",
    },
};

pub static FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("name", "Nom", InputKind::Text)
        .rules(FieldRules::required())
        .in_list(),
    FieldMetadata::new("email", "E-mail", InputKind::Email)
        .rules(FieldRules::required().email())
        .in_list(),
    FieldMetadata::new("phone", "Téléphone", InputKind::Phone)
        .rules(FieldRules::none().phone()),
    FieldMetadata::new("website", "Site web", InputKind::Text)
        .in_list()
        .placeholder("https://"),
    FieldMetadata::new("commissionRate", "Commission (%)", InputKind::Number)
        .in_list(),
    FieldMetadata::new("status", "Statut", InputKind::Select(AFFILIATE_STATUSES))
        .in_list(),
    FieldMetadata::new("notes", "Notes", InputKind::TextArea),
];
