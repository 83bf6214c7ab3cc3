use crate::shared::metadata::{
    EntityMetadataInfo, EntityUiMetadata, FieldMetadata, FieldRules, InputKind,
};

const CHANNELS: &[&str] = &[
    "E-mailing",
    "Réseaux sociaux",
    "SEO / SEA",
    "Événement",
    "Presse",
];

const CAMPAIGN_STATUSES: &[&str] = &[
    "Planifiée",
    "En cours",
    "Terminée",
    "Suspendue",
];

pub static ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo {
    entity_index: "a007",
    collection_name: "campaign",
    storage_key: "campaigns",
    ui: EntityUiMetadata {
        element_name: "Campagne",
        list_name: "Campagnes",
        icon: "megaphone",
    },
};

pub static FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("name", "Nom", InputKind::Text)
        .rules(FieldRules::required())
        .in_list(),
    FieldMetadata::new("channel", "Canal", InputKind::Select(CHANNELS))
        .in_list(),
    FieldMetadata::new("startDate", "Début", InputKind::Date)
        .in_list(),
    FieldMetadata::new("endDate", "Fin", InputKind::Date),
    FieldMetadata::new("budget", "Budget (€)", InputKind::Number)
        .in_list(),
    FieldMetadata::new("status", "Statut", InputKind::Select(CAMPAIGN_STATUSES))
        .in_list(),
    FieldMetadata::new("objective", "Objectif", InputKind::TextArea),
];
