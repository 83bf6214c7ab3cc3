use crate::shared::metadata::{
    EntityMetadataInfo, EntityUiMetadata, FieldMetadata, FieldRules, InputKind,
};

const PRIORITIES: &[&str] = &[
    "Basse",
    "Normale",
    "Haute",
    "Critique",
];

const TICKET_STATUSES: &[&str] = &[
    "Ouvert",
    "En cours",
    "Résolu",
    "Fermé",
];

pub static ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo {
    entity_index: "a011",
    collection_name: "it_ticket",
    storage_key: "it_tickets",
    ui: EntityUiMetadata {
        element_name: "Ticket",
        list_name: "Tickets informatiques",
        icon: "monitor",
    },
};

pub static FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("subject", "Objet", InputKind::Text)
        .rules(FieldRules::required().min_length(5))
        .in_list(),
    FieldMetadata::new("requester", "Demandeur", InputKind::Text)
        .rules(FieldRules::required())
        .in_list(),
    FieldMetadata::new("email", "E-mail du demandeur", InputKind::Email)
        .rules(FieldRules::none().email()),
    FieldMetadata::new("priority", "Priorité", InputKind::Select(PRIORITIES))
        .in_list(),
    FieldMetadata::new("status", "Statut", InputKind::Select(TICKET_STATUSES))
        .in_list(),
    FieldMetadata::new("assignedTo", "Assigné à", InputKind::Text)
        .in_list(),
    FieldMetadata::new("description", "Description", InputKind::TextArea),
];
