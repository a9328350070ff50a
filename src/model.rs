//! Core data models for Gollum Watch: sighting records, map coordinates,
//! and the reducer driving the sightings map page.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

/// A position on the map expressed as percentages of the rendered map box,
/// so pins land in the same spot at any resolution.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapPercent {
    pub top: f64,
    pub left: f64,
}

impl MapPercent {
    /// Converts a click offset (pixels from the container's top-left corner)
    /// into percentages of the container's rendered size.
    pub fn from_click(offset_x: f64, offset_y: f64, width: f64, height: f64) -> Self {
        Self {
            top: (offset_y / height) * 100.0,
            left: (offset_x / width) * 100.0,
        }
    }

    pub fn css_position(&self) -> String {
        format!("top:{}%; left:{}%;", self.top, self.left)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sighting {
    pub id: String,
    pub name: String,
    pub coordinates: MapPercent,
    pub clue: String,
    pub reported_by: String,
}

impl Sighting {
    /// Builds a visitor-reported sighting with a fresh client-side id.
    /// The id is derived from the submission timestamp in milliseconds.
    pub fn report(
        timestamp_ms: f64,
        coordinates: MapPercent,
        clue: String,
        reported_by: String,
    ) -> Self {
        Self {
            id: format!("sighting-{}", timestamp_ms as u64),
            name: "A New Clue!".to_string(),
            coordinates,
            clue,
            reported_by,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    #[serde(default)]
    pub race: Option<String>,
    #[serde(default)]
    pub affiliation: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub key_items: Vec<String>,
    #[serde(default)]
    pub gollums_thoughts: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub description: String,
    pub significance: String,
    pub gollums_thoughts: String,
}

/// Which side a pin's tooltip is pulled towards so it stays on screen.
/// Only horizontal clamping is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TooltipAlign {
    #[default]
    Centered,
    Left,
    Right,
}

impl TooltipAlign {
    pub fn class(&self) -> Option<&'static str> {
        match self {
            TooltipAlign::Centered => None,
            TooltipAlign::Left => Some("align-left"),
            TooltipAlign::Right => Some("align-right"),
        }
    }
}

/// Picks the tooltip variant from its measured viewport rect. A tooltip
/// spilling past the right edge gets `align-right`, past the left edge
/// `align-left`, otherwise it stays centered over the pin.
pub fn tooltip_alignment(rect_left: f64, rect_right: f64, viewport_width: f64) -> TooltipAlign {
    if rect_right > viewport_width {
        TooltipAlign::Right
    } else if rect_left < 0.0 {
        TooltipAlign::Left
    } else {
        TooltipAlign::Centered
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    /// Initial fetch still in flight; map clicks are ignored.
    #[default]
    Loading,
    Ready,
    Failed,
}

/// State of the sightings map page: the pin arena, the one expanded tooltip,
/// and the coordinate picked for the next report.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SightingsState {
    pub phase: LoadPhase,
    pub sightings: Vec<Sighting>,
    /// Id of the pin whose tooltip is expanded; at most one at a time.
    pub active_pin: Option<String>,
    /// Coordinate chosen by the last map click, pending submission.
    pub pending: Option<MapPercent>,
}

#[derive(Clone, Debug)]
pub enum SightingsAction {
    /// Initial fetch resolved with the server's records.
    Loaded(Vec<Sighting>),
    /// Initial fetch failed; the map stays empty.
    LoadFailed,
    /// The fetch timed out; open the map for interaction without pins.
    AbandonLoad,
    /// A map click picked the coordinate for the next report.
    PlaceMarker(MapPercent),
    /// A pin was clicked; expand its tooltip, collapsing any other.
    TogglePin(String),
    /// A submitted report, rendered immediately without waiting on the server.
    AddSighting(Sighting),
}

impl Reducible for SightingsState {
    type Action = SightingsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use SightingsAction::*;
        let mut new = (*self).clone();
        match action {
            Loaded(records) => {
                new.sightings = records;
                new.phase = LoadPhase::Ready;
            }
            LoadFailed => {
                new.phase = LoadPhase::Failed;
            }
            AbandonLoad => {
                // Only meaningful while the fetch is still outstanding; a
                // late response after this simply wins the harmless race.
                if new.phase != LoadPhase::Loading {
                    return self;
                }
                new.phase = LoadPhase::Ready;
            }
            PlaceMarker(coords) => {
                if new.phase == LoadPhase::Loading {
                    return self;
                }
                new.pending = Some(coords);
            }
            TogglePin(id) => {
                new.active_pin = if new.active_pin.as_deref() == Some(id.as_str()) {
                    None
                } else {
                    Some(id)
                };
            }
            AddSighting(record) => {
                new.sightings.push(record);
                new.pending = None;
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_state() -> Rc<SightingsState> {
        Rc::new(SightingsState::default()).reduce(SightingsAction::Loaded(Vec::new()))
    }

    fn sample_sighting(id: &str) -> Sighting {
        Sighting {
            id: id.to_string(),
            name: "A New Clue!".to_string(),
            coordinates: MapPercent {
                top: 10.0,
                left: 20.0,
            },
            clue: "footprints in the mud".to_string(),
            reported_by: "Sam".to_string(),
        }
    }

    #[test]
    fn click_offsets_convert_to_percentages() {
        let coords = MapPercent::from_click(150.0, 100.0, 300.0, 200.0);
        assert_eq!(coords.left, 50.0);
        assert_eq!(coords.top, 50.0);
    }

    #[test]
    fn css_position_uses_percent_offsets() {
        let coords = MapPercent {
            top: 12.5,
            left: 87.5,
        };
        assert_eq!(coords.css_position(), "top:12.5%; left:87.5%;");
    }

    #[test]
    fn reported_sighting_gets_timestamp_id() {
        let record = Sighting::report(
            1_700_000_000_123.0,
            MapPercent {
                top: 50.0,
                left: 50.0,
            },
            "Saw him near the river".to_string(),
            "Sam".to_string(),
        );
        assert_eq!(record.id, "sighting-1700000000123");
        assert_eq!(record.name, "A New Clue!");
        assert_eq!(record.reported_by, "Sam");
    }

    #[test]
    fn tooltip_stays_centered_inside_viewport() {
        assert_eq!(
            tooltip_alignment(10.0, 200.0, 1280.0),
            TooltipAlign::Centered
        );
    }

    #[test]
    fn tooltip_clamps_at_viewport_edges() {
        assert_eq!(
            tooltip_alignment(1200.0, 1400.0, 1280.0),
            TooltipAlign::Right
        );
        assert_eq!(tooltip_alignment(-30.0, 170.0, 1280.0), TooltipAlign::Left);
    }

    #[test]
    fn map_clicks_are_ignored_until_load_settles() {
        let state = Rc::new(SightingsState::default());
        let state = state.reduce(SightingsAction::PlaceMarker(MapPercent {
            top: 1.0,
            left: 1.0,
        }));
        assert_eq!(state.pending, None);
    }

    #[test]
    fn map_clicks_replace_the_pending_marker() {
        let state = ready_state()
            .reduce(SightingsAction::PlaceMarker(MapPercent {
                top: 10.0,
                left: 10.0,
            }))
            .reduce(SightingsAction::PlaceMarker(MapPercent {
                top: 60.0,
                left: 40.0,
            }));
        assert_eq!(
            state.pending,
            Some(MapPercent {
                top: 60.0,
                left: 40.0,
            })
        );
    }

    #[test]
    fn abandon_opens_the_map_without_pins() {
        let state = Rc::new(SightingsState::default()).reduce(SightingsAction::AbandonLoad);
        assert_eq!(state.phase, LoadPhase::Ready);
        assert!(state.sightings.is_empty());

        let state = state.reduce(SightingsAction::PlaceMarker(MapPercent {
            top: 5.0,
            left: 5.0,
        }));
        assert!(state.pending.is_some());
    }

    #[test]
    fn abandon_after_failure_changes_nothing() {
        let state = Rc::new(SightingsState::default())
            .reduce(SightingsAction::LoadFailed)
            .reduce(SightingsAction::AbandonLoad);
        assert_eq!(state.phase, LoadPhase::Failed);
    }

    #[test]
    fn at_most_one_tooltip_is_expanded() {
        let state = ready_state()
            .reduce(SightingsAction::AddSighting(sample_sighting("sighting-1")))
            .reduce(SightingsAction::AddSighting(sample_sighting("sighting-2")))
            .reduce(SightingsAction::TogglePin("sighting-1".to_string()));
        assert_eq!(state.active_pin.as_deref(), Some("sighting-1"));

        let state = state.reduce(SightingsAction::TogglePin("sighting-2".to_string()));
        assert_eq!(state.active_pin.as_deref(), Some("sighting-2"));

        let state = state.reduce(SightingsAction::TogglePin("sighting-2".to_string()));
        assert_eq!(state.active_pin, None);
    }

    #[test]
    fn submitting_appends_a_pin_and_clears_the_marker() {
        let state = ready_state().reduce(SightingsAction::PlaceMarker(MapPercent {
            top: 50.0,
            left: 50.0,
        }));
        let coords = state.pending.unwrap();
        let record = Sighting::report(
            1_000.0,
            coords,
            "Saw him near the river".to_string(),
            "Sam".to_string(),
        );
        let state = state.reduce(SightingsAction::AddSighting(record));

        assert_eq!(state.sightings.len(), 1);
        assert_eq!(state.sightings[0].coordinates.top, 50.0);
        assert_eq!(state.sightings[0].coordinates.left, 50.0);
        assert_eq!(state.pending, None);
    }

    #[test]
    fn sighting_serializes_with_nested_coordinates() {
        let record = sample_sighting("sighting-42");
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["id"], "sighting-42");
        assert_eq!(value["coordinates"]["top"], 10.0);
        assert_eq!(value["coordinates"]["left"], 20.0);
        assert_eq!(value["reported_by"], "Sam");
    }

    #[test]
    fn character_fills_missing_fields_with_defaults() {
        let character: Character =
            serde_json::from_value(serde_json::json!({ "name": "Déagol" })).unwrap();
        assert_eq!(character.name, "Déagol");
        assert_eq!(character.race, None);
        assert!(character.key_items.is_empty());
    }
}
