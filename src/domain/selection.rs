//! Click-driven drill-down selection, held by the caller as a plain value.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::common::*;
use crate::domain::filter::KeyFilter;
use crate::domain::record::SalesRecord;

/// Which half of the selection a toggle targets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SelectionField {
    Category,
    Region,
}

impl fmt::Display for SelectionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SelectionField::Category => "category",
            SelectionField::Region => "region",
        };
        f.write_str(label)
    }
}

/// Payload a chart emits when the user clicks a slice, bar, or map area.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InteractionEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl InteractionEvent {
    pub fn category(label: impl Into<String>) -> Self {
        Self {
            category: Some(label.into()),
            region: None,
        }
    }

    pub fn region(label: impl Into<String>) -> Self {
        Self {
            category: None,
            region: Some(label.into()),
        }
    }
}

/// Cross-filter selection. Each field toggles independently: picking the
/// current value clears it, picking another value replaces it. A label
/// outside the key set is stored as `Unrecognized` and matches no record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SelectionState {
    #[serde(default, skip_serializing_if = "KeyFilter::is_all")]
    pub selected_category: KeyFilter<Category>,
    #[serde(default, skip_serializing_if = "KeyFilter::is_all")]
    pub selected_region: KeyFilter<Region>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_category(&self, category: Category) -> Self {
        Self {
            selected_category: toggled(&self.selected_category, KeyFilter::Only(category)),
            ..self.clone()
        }
    }

    pub fn toggle_region(&self, region: Region) -> Self {
        Self {
            selected_region: toggled(&self.selected_region, KeyFilter::Only(region)),
            ..self.clone()
        }
    }

    /// Toggles `field` using a raw label, e.g. a chart payload or a rolled-up
    /// state name.
    pub fn toggle(&self, field: SelectionField, value: &str) -> Self {
        match field {
            SelectionField::Category => {
                let next = KeyFilter::parse(value);
                log_unrecognized(field, &next);
                Self {
                    selected_category: toggled(&self.selected_category, next),
                    ..self.clone()
                }
            }
            SelectionField::Region => {
                let next = KeyFilter::parse(value);
                log_unrecognized(field, &next);
                Self {
                    selected_region: toggled(&self.selected_region, next),
                    ..self.clone()
                }
            }
        }
    }

    /// Applies every field present in a click payload.
    pub fn apply(&self, event: &InteractionEvent) -> Self {
        let mut next = self.clone();
        if let Some(category) = event.category.as_deref() {
            next = next.toggle(SelectionField::Category, category);
        }
        if let Some(region) = event.region.as_deref() {
            next = next.toggle(SelectionField::Region, region);
        }
        next
    }

    pub fn clear_all(&self) -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.selected_category.is_all() && self.selected_region.is_all()
    }

    pub fn matches(&self, record: &SalesRecord) -> bool {
        self.selected_category.matches(&record.category)
            && self.selected_region.matches(&record.region)
    }
}

fn toggled<T: PartialEq>(current: &KeyFilter<T>, next: KeyFilter<T>) -> KeyFilter<T> {
    if *current == next {
        KeyFilter::All
    } else {
        next
    }
}

fn log_unrecognized<T>(field: SelectionField, value: &KeyFilter<T>) {
    if let KeyFilter::Unrecognized(raw) = value {
        tracing::debug!(%field, label = %raw, "selection holds an unrecognized label");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_restores_the_original() {
        let start = SelectionState::new();
        let once = start.toggle(SelectionField::Category, "Electronics");
        assert_eq!(once.selected_category, KeyFilter::Only(Category::Electronics));
        let twice = once.toggle(SelectionField::Category, "Electronics");
        assert_eq!(twice, start);
    }

    #[test]
    fn fields_toggle_independently() {
        let state = SelectionState::new()
            .toggle_region(Region::South)
            .toggle_category(Category::Books)
            .toggle_category(Category::Books);
        assert_eq!(state.selected_region, KeyFilter::Only(Region::South));
        assert!(state.selected_category.is_all());

        let state = state.toggle_category(Category::Sports).toggle_region(Region::South);
        assert_eq!(state.selected_category, KeyFilter::Only(Category::Sports));
        assert!(state.selected_region.is_all());
    }

    #[test]
    fn different_value_replaces_selection() {
        let state = SelectionState::new()
            .toggle_region(Region::North)
            .toggle_region(Region::East);
        assert_eq!(state.selected_region, KeyFilter::Only(Region::East));
    }

    #[test]
    fn unknown_label_replaces_selection_and_matches_nothing() {
        let state = SelectionState::new().toggle_region(Region::West);
        let next = state.toggle(SelectionField::Region, "Atlantis");
        assert_eq!(next.selected_region, KeyFilter::Unrecognized("Atlantis".into()));
        assert!(!next.is_empty());

        let record = SalesRecord::new(
            chrono::NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            Category::Books,
            Region::West,
            crate::domain::SalesFigures::default(),
        );
        assert!(state.matches(&record));
        assert!(!next.matches(&record));
        assert!(next.toggle(SelectionField::Region, "Atlantis").is_empty());

        let toys = SelectionState::new().toggle(SelectionField::Category, "Toys");
        assert_eq!(toys.selected_category, KeyFilter::Unrecognized("Toys".into()));
    }

    #[test]
    fn selection_serializes_labels_and_skips_empty_fields() {
        let state = SelectionState::new().toggle_region(Region::West);
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"selectedRegion":"West India"}"#);
        let back: SelectionState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn apply_handles_both_fields_of_an_event() {
        let event = InteractionEvent {
            category: Some("Clothing".into()),
            region: Some("Central India".into()),
        };
        let state = SelectionState::new().apply(&event);
        assert_eq!(state.selected_category, KeyFilter::Only(Category::Clothing));
        assert_eq!(state.selected_region, KeyFilter::Only(Region::Central));
        assert!(state.apply(&event).is_empty());
    }

    #[test]
    fn clear_all_resets_both_fields() {
        let state = SelectionState::new()
            .toggle_category(Category::Books)
            .toggle_region(Region::North);
        assert!(state.clear_all().is_empty());
    }

    #[test]
    fn event_payload_uses_camel_case_and_omits_missing_fields() {
        let json = serde_json::to_string(&InteractionEvent::region("West India")).unwrap();
        assert_eq!(json, r#"{"region":"West India"}"#);
        let event: InteractionEvent = serde_json::from_str(r#"{"category":"Books"}"#).unwrap();
        assert_eq!(event, InteractionEvent::category("Books"));
    }
}
