//! Tab titles: the list name of a record kind, fixed titles otherwise.

use crate::dashboards::OVERVIEW_TAB_KEY;
use contracts::domain::common::RecordKind;

/// Readable title of a tab key; unknown keys are shown as is
pub fn tab_label_for_key(key: &str) -> String {
    if key == OVERVIEW_TAB_KEY {
        return "Vue d'ensemble".to_string();
    }
    RecordKind::from_full_name(key)
        .map(|kind| kind.list_name().to_string())
        .unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(tab_label_for_key("d400_overview"), "Vue d'ensemble");
        assert_eq!(
            tab_label_for_key(&RecordKind::Member.full_name()),
            RecordKind::Member.list_name()
        );
        assert_eq!(tab_label_for_key("x_unknown"), "x_unknown");
    }
}
