use crate::shared::metadata::{
    EntityMetadataInfo, EntityUiMetadata, FieldMetadata, FieldRules, InputKind,
};

const CANDIDATE_STATUSES: &[&str] = &[
    "Nouveau",
    "Présélectionné",
    "Entretien",
    "Offre",
    "Embauché",
    "Refusé",
];

pub static ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo {
    entity_index: "a002",
    collection_name: "candidate",
    storage_key: "candidats",
    ui: EntityUiMetadata {
        element_name: "Candidat",
        list_name: "Candidats",
        icon: "user-check",
    },
};

pub static FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("name", "Nom", InputKind::Text)
        .rules(FieldRules::required())
        .in_list()
        .placeholder("Jean Dupont"),
    FieldMetadata::new("email", "E-mail", InputKind::Email)
        .rules(FieldRules::required().email())
        .in_list(),
    FieldMetadata::new("phone", "Téléphone", InputKind::Phone)
        .rules(FieldRules::none().phone())
        .in_list(),
    FieldMetadata::new("position", "Poste visé", InputKind::Text)
        .rules(FieldRules::required())
        .in_list(),
    FieldMetadata::new("status", "Statut", InputKind::Select(CANDIDATE_STATUSES))
        .in_list(),
    FieldMetadata::new("experienceYears", "Années d'expérience", InputKind::Number),
    FieldMetadata::new("skills", "Compétences", InputKind::Tags)
        .placeholder("Ajouter une compétence"),
    FieldMetadata::new("notes", "Notes", InputKind::TextArea),
];
