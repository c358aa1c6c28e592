//! Stop selection and journey-form state
//!
//! The popup flow has two pieces of state: the stop whose popup is currently
//! open, and an optionally pinned stop used as the other end of a journey.
//! Both are plain `Option`s owned here; popup-open events overwrite the
//! first, the pin button copies it into the second. The journey itself is
//! delegated to an external web form; [`TripQuery`] only carries the form's
//! field values.

use crate::data::transit::StopPin;
use chrono::NaiveDateTime;

/// Submission target of the journey-planner form.
pub const JOURNEY_FORM_URL: &str = "https://www.dvb.de/de-de/fahrplan/verbindungsauskunft";

/// Clicked/pinned stop state behind the stop popup.
#[derive(Default)]
pub struct StopSelection {
    clicked: Option<StopPin>,
    pinned: Option<StopPin>,
}

impl StopSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// A stop's popup was opened.
    pub fn open(&mut self, stop: StopPin) {
        self.clicked = Some(stop);
    }

    pub fn clicked(&self) -> Option<&StopPin> {
        self.clicked.as_ref()
    }

    pub fn pinned(&self) -> Option<&StopPin> {
        self.pinned.as_ref()
    }

    /// Pins the currently open stop, replacing any previous pin. Returns the
    /// pinned stop so the host can place or move its pin marker.
    pub fn pin_clicked(&mut self) -> Option<&StopPin> {
        self.pinned = self.clicked.clone();
        self.pinned.as_ref()
    }

    /// Clicking the pin marker removes it again.
    pub fn unpin(&mut self) {
        self.pinned = None;
    }

    /// Hover texts for the two journey buttons, available once both a
    /// clicked and a pinned stop exist: (from clicked, to clicked).
    pub fn hover_labels(&self) -> Option<(String, String)> {
        let clicked = self.clicked.as_ref()?;
        let pinned = self.pinned.as_ref()?;
        Some((
            format!("von {}\nnach {}", clicked.name, pinned.name),
            format!("von {}\nnach {}", pinned.name, clicked.name),
        ))
    }

    /// Journey starting at the open stop, ending at the pin (if any).
    pub fn trip_from_clicked(&self, when: NaiveDateTime) -> Option<TripQuery> {
        let clicked = self.clicked.as_ref()?;
        Some(TripQuery::new(
            &clicked.id,
            self.pinned.as_ref().map(|stop| stop.id.as_str()).unwrap_or(""),
            when,
        ))
    }

    /// Journey starting at the pin (if any), ending at the open stop.
    pub fn trip_to_clicked(&self, when: NaiveDateTime) -> Option<TripQuery> {
        let clicked = self.clicked.as_ref()?;
        Some(TripQuery::new(
            self.pinned.as_ref().map(|stop| stop.id.as_str()).unwrap_or(""),
            &clicked.id,
            when,
        ))
    }
}

/// Field values for one journey-planner form submission.
#[derive(Debug, Clone, PartialEq)]
pub struct TripQuery {
    pub origin_id: String,
    pub destination_id: String,
    pub date: String,
    pub time: String,
}

impl TripQuery {
    fn new(origin_id: &str, destination_id: &str, when: NaiveDateTime) -> Self {
        Self {
            origin_id: origin_id.to_string(),
            destination_id: destination_id.to_string(),
            date: when.format("%d.%m.%Y").to_string(),
            time: when.format("%H:%M").to_string(),
        }
    }

    /// Hidden form fields in submission order.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("date", self.date.clone()),
            ("time", self.time.clone()),
            ("originid", self.origin_id.clone()),
            ("destinationid", self.destination_id.clone()),
            ("submit", "true".to_string()),
            ("arrival", "false".to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::LatLng;
    use chrono::NaiveDate;

    fn stop(id: &str, name: &str) -> StopPin {
        StopPin {
            id: id.to_string(),
            name: name.to_string(),
            position: LatLng::new(51.05, 13.74),
        }
    }

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 4)
            .unwrap()
            .and_hms_opt(12, 5, 0)
            .unwrap()
    }

    #[test]
    fn test_pin_copies_the_open_stop() {
        let mut selection = StopSelection::new();
        assert!(selection.pin_clicked().is_none());

        selection.open(stop("1", "Hauptbahnhof"));
        let pinned = selection.pin_clicked().unwrap();
        assert_eq!(pinned.id, "1");

        selection.open(stop("2", "Albertplatz"));
        assert_eq!(selection.pinned().unwrap().id, "1");

        selection.unpin();
        assert!(selection.pinned().is_none());
    }

    #[test]
    fn test_hover_labels_need_both_stops() {
        let mut selection = StopSelection::new();
        selection.open(stop("1", "Hauptbahnhof"));
        assert!(selection.hover_labels().is_none());

        selection.pin_clicked();
        selection.open(stop("2", "Albertplatz"));
        let (from_clicked, to_clicked) = selection.hover_labels().unwrap();
        assert_eq!(from_clicked, "von Albertplatz\nnach Hauptbahnhof");
        assert_eq!(to_clicked, "von Hauptbahnhof\nnach Albertplatz");
    }

    #[test]
    fn test_trip_directions() {
        let mut selection = StopSelection::new();
        selection.open(stop("1", "Hauptbahnhof"));
        selection.pin_clicked();
        selection.open(stop("2", "Albertplatz"));

        let from_clicked = selection.trip_from_clicked(noon()).unwrap();
        assert_eq!(from_clicked.origin_id, "2");
        assert_eq!(from_clicked.destination_id, "1");

        let to_clicked = selection.trip_to_clicked(noon()).unwrap();
        assert_eq!(to_clicked.origin_id, "1");
        assert_eq!(to_clicked.destination_id, "2");
    }

    #[test]
    fn test_trip_without_pin_leaves_other_end_empty() {
        let mut selection = StopSelection::new();
        selection.open(stop("2", "Albertplatz"));

        let trip = selection.trip_from_clicked(noon()).unwrap();
        assert_eq!(trip.origin_id, "2");
        assert_eq!(trip.destination_id, "");
    }

    #[test]
    fn test_form_fields_and_timestamp_format() {
        let trip = TripQuery::new("33000028", "33000037", noon());
        let fields = trip.form_fields();

        assert_eq!(fields[0], ("date", "04.08.2026".to_string()));
        assert_eq!(fields[1], ("time", "12:05".to_string()));
        assert_eq!(fields[2], ("originid", "33000028".to_string()));
        assert_eq!(fields[3], ("destinationid", "33000037".to_string()));
        assert_eq!(fields[4], ("submit", "true".to_string()));
        assert_eq!(fields[5], ("arrival", "false".to_string()));
    }

    #[test]
    fn test_trip_needs_an_open_stop() {
        let selection = StopSelection::new();
        assert!(selection.trip_from_clicked(noon()).is_none());
        assert!(selection.trip_to_clicked(noon()).is_none());
    }
}
