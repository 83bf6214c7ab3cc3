use crate::shared::metadata::{
    EntityMetadataInfo, EntityUiMetadata, FieldMetadata, FieldRules, InputKind,
};

const LEAD_SOURCES: &[&str] = &[
    "Site web",
    "Salon",
    "Recommandation",
    "Réseaux sociaux",
    "Autre",
];

const LEAD_STATUSES: &[&str] = &[
    "Nouveau",
    "Contacté",
    "Qualifié",
    "Gagné",
    "Perdu",
];

pub static ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo {
    entity_index: "a001",
    collection_name: "lead",
    storage_key: "leads",
    ui: EntityUiMetadata {
        element_name: "Prospect",
        list_name: "Prospects",
        icon: "target",
    },
};

pub static FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("name", "Nom", InputKind::Text)
        .rules(FieldRules::required())
        .in_list()
        .placeholder("Jean Dupont"),
    FieldMetadata::new("email", "E-mail", InputKind::Email)
        .rules(FieldRules::required().email())
        .in_list()
        .placeholder("jean@exemple.fr"),
    FieldMetadata::new("phone", "Téléphone", InputKind::Phone)
        .rules(FieldRules::none().phone())
        .in_list()
        .placeholder("0600000000"),
    FieldMetadata::new("company", "Société", InputKind::Text)
        .in_list(),
    FieldMetadata::new("source", "Origine", InputKind::Select(LEAD_SOURCES)),
    FieldMetadata::new("status", "Statut", InputKind::Select(LEAD_STATUSES))
        .in_list(),
    FieldMetadata::new("estimatedValue", "Valeur estimée (€)", InputKind::Number),
    FieldMetadata::new("notes", "Notes", InputKind::TextArea),
];
