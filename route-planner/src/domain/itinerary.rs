//! Itinerary types.
//!
//! An itinerary is the human-facing form of a path: instead of listing every
//! stop, it lists only where the traveller boards and where they change.

use serde::{Serialize, Serializer};

use super::{Route, Stop};

/// One step of an itinerary: board (or change to) `route` at `stop`.
///
/// The final entry of every itinerary has `route: None`, marking arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ItineraryEntry<'a> {
    /// Where the boarding or change happens.
    pub stop: &'a Stop,

    /// Route taken from this stop, or `None` at the destination.
    #[serde(serialize_with = "serialize_route_id")]
    pub route: Option<&'a Route>,
}

impl<'a> ItineraryEntry<'a> {
    /// Board `route` at `stop`.
    pub fn board(stop: &'a Stop, route: &'a Route) -> Self {
        Self {
            stop,
            route: Some(route),
        }
    }

    /// Arrive at `stop`.
    pub fn arrive(stop: &'a Stop) -> Self {
        Self { stop, route: None }
    }
}

fn serialize_route_id<S: Serializer>(route: &Option<&Route>, s: S) -> Result<S::Ok, S::Error> {
    route.map(Route::id).serialize(s)
}

/// An ordered sequence of boarding points and route changes.
///
/// Always non-empty when produced by the planner: the last entry is the
/// destination with no route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Itinerary<'a> {
    entries: Vec<ItineraryEntry<'a>>,
}

impl<'a> Itinerary<'a> {
    pub(crate) fn new(entries: Vec<ItineraryEntry<'a>>) -> Self {
        Self { entries }
    }

    /// All entries in travel order.
    pub fn entries(&self) -> &[ItineraryEntry<'a>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of route changes after the initial boarding.
    pub fn change_count(&self) -> usize {
        self.routes().count().saturating_sub(1)
    }

    /// Routes taken, in order.
    pub fn routes(&self) -> impl Iterator<Item = &'a Route> + '_ {
        self.entries.iter().filter_map(|e| e.route)
    }

    /// The arrival stop.
    pub fn destination(&self) -> Option<&'a Stop> {
        self.entries.last().map(|e| e.stop)
    }
}

impl<'i, 'a> IntoIterator for &'i Itinerary<'a> {
    type Item = &'i ItineraryEntry<'a>;
    type IntoIter = std::slice::Iter<'i, ItineraryEntry<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RouteId, StopId};

    fn stop(id: &str) -> Stop {
        Stop::new(StopId::new(id).unwrap(), id.to_uppercase())
    }

    fn route(id: &str) -> Route {
        Route::new(RouteId::new(id).unwrap(), format!("{id} Line"), vec![])
    }

    #[test]
    fn arrival_only() {
        let a = stop("a");
        let itinerary = Itinerary::new(vec![ItineraryEntry::arrive(&a)]);

        assert_eq!(itinerary.len(), 1);
        assert_eq!(itinerary.change_count(), 0);
        assert_eq!(itinerary.destination(), Some(&a));
        assert_eq!(itinerary.routes().count(), 0);
    }

    #[test]
    fn change_count_excludes_boarding() {
        let (a, b, c) = (stop("a"), stop("b"), stop("c"));
        let (red, green) = (route("Red"), route("Green"));
        let itinerary = Itinerary::new(vec![
            ItineraryEntry::board(&a, &red),
            ItineraryEntry::board(&b, &green),
            ItineraryEntry::arrive(&c),
        ]);

        assert_eq!(itinerary.change_count(), 1);
        let names: Vec<_> = itinerary.routes().map(Route::name).collect();
        assert_eq!(names, vec!["Red Line", "Green Line"]);
    }

    #[test]
    fn serializes_route_as_id() {
        let (a, b) = (stop("a"), stop("b"));
        let red = route("Red");
        let itinerary = Itinerary::new(vec![
            ItineraryEntry::board(&a, &red),
            ItineraryEntry::arrive(&b),
        ]);

        let json = serde_json::to_value(&itinerary).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"stop": {"id": "a", "name": "A"}, "route": "Red"},
                {"stop": {"id": "b", "name": "B"}, "route": null}
            ])
        );
    }
}
