use crate::shared::metadata::{
    EntityMetadataInfo, EntityUiMetadata, FieldMetadata, FieldRules, InputKind,
};

pub static ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo {
    entity_index: "a003",
    collection_name: "applicant",
    storage_key: "candidates",
    ui: EntityUiMetadata {
        element_name: "Candidature spontanée",
        list_name: "Candidatures spontanées",
        icon: "inbox",
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
    FieldMetadata::new("desiredPosition", "Poste souhaité", InputKind::Text)
        .in_list(),
    FieldMetadata::new("availability", "Disponibilité", InputKind::Date)
        .in_list(),
    FieldMetadata::new("languages", "Langues", InputKind::Tags)
        .placeholder("Ajouter une langue"),
    FieldMetadata::new("motivation", "Motivation", InputKind::TextArea),
];
