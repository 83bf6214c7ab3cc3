use crate::shared::metadata::{
    EntityMetadataInfo, EntityUiMetadata, FieldMetadata, FieldRules, InputKind,
};

const MEMBER_ROLES: &[&str] = &[
    "Responsable",
    "Chargé de communication",
    "Community manager",
    "Graphiste",
    "Rédacteur",
];

pub static ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo {
    entity_index: "a004",
    collection_name: "member",
    storage_key: "members",
    ui: EntityUiMetadata {
        element_name: "Membre",
        list_name: "Membres de l'équipe",
        icon: "users",
    },
};

pub static FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("name", "Nom", InputKind::Text)
        .rules(FieldRules::required().min_length(2))
        .in_list()
        .placeholder("Jean Dupont"),
    FieldMetadata::new("email", "E-mail", InputKind::Email)
        .rules(FieldRules::required().email())
        .in_list()
        .placeholder("jean@exemple.fr"),
    FieldMetadata::new("phone", "Téléphone", InputKind::Phone)
        .rules(FieldRules::required().phone())
        .in_list()
        .placeholder("0600000000"),
    FieldMetadata::new("role", "Rôle", InputKind::Select(MEMBER_ROLES))
        .in_list(),
    FieldMetadata::new("team", "Équipe", InputKind::Text),
    FieldMetadata::new("skills", "Compétences", InputKind::Tags)
        .placeholder("Ajouter une compétence"),
    FieldMetadata::new("languages", "Langues", InputKind::Tags)
        .placeholder("Ajouter une langue"),
    FieldMetadata::new("bio", "Biographie", InputKind::TextArea),
];
