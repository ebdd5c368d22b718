//! Statistics aggregated over an organizer's events

use serde::{Deserialize, Serialize};

use super::event::Event;

/// Dashboard totals over a list of events
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventsOverview {
    pub total_events: usize,
    pub tickets_sold: u64,
    pub tickets_scanned: u64,
    pub revenue: f64,
}

impl EventsOverview {
    /// Sum the statistics of every event. Events without statistics still
    /// count towards `total_events`.
    #[must_use]
    pub fn from_events(events: &[Event]) -> Self {
        events.iter().fold(
            Self { total_events: events.len(), ..Self::default() },
            |mut acc, event| {
                if let Some(stats) = &event.statistics {
                    acc.tickets_sold += u64::from(stats.tickets_sold);
                    acc.tickets_scanned += u64::from(stats.tickets_scanned);
                    acc.revenue += stats.revenue;
                }
                acc
            },
        )
    }

    /// Fraction of sold tickets that were scanned at the door.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn scan_rate(&self) -> f64 {
        if self.tickets_sold == 0 {
            0.0
        } else {
            self.tickets_scanned as f64 / self.tickets_sold as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EventStatistics;

    fn event(id: i64, stats: Option<EventStatistics>) -> Event {
        Event {
            id,
            name: format!("event-{id}"),
            description: String::new(),
            address: String::new(),
            city: String::new(),
            country: String::new(),
            zipcode: String::new(),
            price: 10.0,
            ticket_count_limited: false,
            ticket_count: None,
            date: None,
            image_url: None,
            statistics: stats,
        }
    }

    #[test]
    fn sums_only_events_with_statistics() {
        let events = vec![
            event(1, Some(EventStatistics { tickets_sold: 10, tickets_scanned: 4, revenue: 100.0 })),
            event(2, None),
            event(3, Some(EventStatistics { tickets_sold: 5, tickets_scanned: 1, revenue: 50.0 })),
        ];

        let overview = EventsOverview::from_events(&events);
        assert_eq!(overview.total_events, 3);
        assert_eq!(overview.tickets_sold, 15);
        assert_eq!(overview.tickets_scanned, 5);
        assert!((overview.revenue - 150.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_list_has_zero_scan_rate() {
        let overview = EventsOverview::from_events(&[]);
        assert_eq!(overview.total_events, 0);
        assert!(overview.scan_rate().abs() < f64::EPSILON);
    }
}
