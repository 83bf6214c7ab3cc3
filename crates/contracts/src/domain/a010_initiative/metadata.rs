use crate::shared::metadata::{
    EntityMetadataInfo, EntityUiMetadata, FieldMetadata, FieldRules, InputKind,
};

const CATEGORIES: &[&str] = &[
    "Énergie",
    "Déchets",
    "Mobilité",
    "Achats responsables",
    "Social",
];

pub static ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo {
    entity_index: "a010",
    collection_name: "initiative",
    storage_key: "initiatives",
    ui: EntityUiMetadata {
        element_name: "Initiative RSE",
        list_name: "Initiatives RSE",
        icon: "leaf",
    },
};

pub static FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("title", "Intitulé", InputKind::Text)
        .rules(FieldRules::required())
        .in_list(),
    FieldMetadata::new("category", "Catégorie", InputKind::Select(CATEGORIES))
        .in_list(),
    FieldMetadata::new("owner", "Responsable", InputKind::Text)
        .in_list(),
    FieldMetadata::new("targetDate", "Échéance", InputKind::Date)
        .in_list(),
    FieldMetadata::new("progress", "Avancement (%)", InputKind::Number)
        .in_list(),
    FieldMetadata::new("description", "Description", InputKind::TextArea),
];
