//! Active filter chips
//!
//! One chip per non-default filter axis plus one per selected tag. A chip
//! knows which axis it stands for, so clearing it resets exactly that axis.

use crate::filters::{FacetOptions, FilterAxis, FilterState};

/// A removable badge describing one active filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveFilterChip {
    /// Stable identifier, e.g. `owner` or `tag:t1`
    pub id: String,
    /// Display text, e.g. `Owner: Ada`
    pub label: String,
    /// The axis cleared by this chip
    pub axis: FilterAxis,
}

impl ActiveFilterChip {
    /// Remove the filter this chip represents and nothing else
    ///
    /// Returns true when the state changed.
    pub fn clear(&self, state: &mut FilterState) -> bool {
        state.clear_axis(&self.axis)
    }
}

/// Build the chip list for `state`, using `facets` for readable labels
///
/// Ids that no longer appear in `facets` fall back to the raw id.
#[must_use]
pub fn active_chips(state: &FilterState, facets: &FacetOptions) -> Vec<ActiveFilterChip> {
    state
        .active_axes()
        .into_iter()
        .map(|axis| {
            let (id, label) = match &axis {
                FilterAxis::Search => ("search".to_string(), format!("Search: \"{}\"", state.search.trim())),
                FilterAxis::Owner => {
                    let owner = state.owner.as_deref().unwrap_or_default();
                    let name = facets.owner_label(owner).unwrap_or(owner);
                    ("owner".to_string(), format!("Owner: {name}"))
                }
                FilterAxis::Visibility => {
                    let label = state.visibility.map(|v| v.label()).unwrap_or_default();
                    ("visibility".to_string(), format!("Visibility: {label}"))
                }
                FilterAxis::ContentType => {
                    let label = state.content_type.as_ref().map_or_else(String::new, |ct| {
                        facets
                            .content_type_label(ct)
                            .map_or_else(|| ct.id(), str::to_string)
                    });
                    ("content-type".to_string(), format!("Type: {label}"))
                }
                FilterAxis::Size => {
                    let label = state.size.map(|s| s.label()).unwrap_or_default();
                    ("size".to_string(), format!("Size: {label}"))
                }
                FilterAxis::Tag(tag) => {
                    let name = facets.tag_label(tag).unwrap_or(tag);
                    (format!("tag:{tag}"), format!("Tag: {name}"))
                }
            };
            ActiveFilterChip { id, label, axis }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{ContentType, SizeBucket};
    use crate::records::Visibility;
    use crate::testing::model;

    fn facets() -> FacetOptions {
        FacetOptions::from_records(&[model("m1", "x")
            .owner("u1", "Ada")
            .tag("t1", "cyberpunk", "style")
            .tag("lora", "LoRA", "type")
            .build()])
    }

    fn busy_state() -> FilterState {
        FilterState {
            search: "neon".to_string(),
            owner: Some("u1".to_string()),
            visibility: Some(Visibility::Public),
            content_type: Some(ContentType::TypeTag("lora".to_string())),
            size: Some(SizeBucket::Small),
            tags: vec!["t1".to_string(), "gone".to_string()],
        }
    }

    #[test]
    fn test_no_chips_for_default_state() {
        assert!(active_chips(&FilterState::new(), &facets()).is_empty());
    }

    #[test]
    fn test_chip_count_matches_axes_plus_tags() {
        let chips = active_chips(&busy_state(), &facets());
        assert_eq!(chips.len(), 5 + 2);
    }

    #[test]
    fn test_chip_labels_use_facet_labels() {
        let chips = active_chips(&busy_state(), &facets());
        let labels: Vec<&str> = chips.iter().map(|c| c.label.as_str()).collect();
        assert!(labels.contains(&"Owner: Ada"));
        assert!(labels.contains(&"Type: LoRA"));
        assert!(labels.contains(&"Tag: cyberpunk"));
        assert!(labels.contains(&"Tag: gone"));
        assert!(labels.contains(&"Search: \"neon\""));
    }

    #[test]
    fn test_each_chip_clears_exactly_its_axis() {
        let original = busy_state();
        for chip in active_chips(&original, &facets()) {
            let mut state = original.clone();
            assert!(chip.clear(&mut state));

            let remaining = active_chips(&state, &facets());
            assert_eq!(remaining.len(), 6);
            assert!(remaining.iter().all(|c| c.id != chip.id));
            for other in remaining {
                assert!(original.active_axes().contains(&other.axis));
            }
        }
    }
}
