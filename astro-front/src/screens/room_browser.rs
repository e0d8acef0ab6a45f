//! Public room browser
//!
//! Holds a small in-memory catalogue, runs availability searches over it and
//! prices a room in the quick view.

use rust_decimal::Decimal;
use shared::models::{Room, RoomId, RoomStatus};
use shared::search::{AvailabilityQuery, SearchError, StayQuote, quote};
use std::collections::BTreeSet;

/// Shown when the range is empty or reversed
pub const INVALID_RANGE_MESSAGE: &str = "Tanggal check-out harus setelah tanggal check-in.";
/// Shown when a valid search finds nothing
pub const NO_ROOMS_MESSAGE: &str = "Maaf, tidak ada kamar tersedia untuk kriteria Anda.";

/// Result of the last search
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Nothing searched yet; the whole catalogue is listed
    Idle,
    /// `matches` are positions in the catalogue; ids may be blank or repeated
    Found { nights: u32, matches: Vec<usize> },
    NoneAvailable { nights: u32 },
    Invalid(SearchError),
}

impl SearchOutcome {
    /// Banner text for the empty and invalid states
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Invalid(SearchError::InvalidDateRange { .. }) => Some(INVALID_RANGE_MESSAGE),
            Self::Invalid(SearchError::EmptyParty) => Some("Minimal 1 kamar dan 1 dewasa."),
            Self::NoneAvailable { .. } => Some(NO_ROOMS_MESSAGE),
            Self::Idle | Self::Found { .. } => None,
        }
    }
}

/// Room chosen in the quick-view modal, priced when dates are known
#[derive(Debug, Clone, PartialEq)]
pub struct QuickView<'a> {
    pub room: &'a Room,
    pub quote: Option<StayQuote>,
}

pub struct RoomBrowser {
    rooms: Vec<Room>,
    last_query: Option<AvailabilityQuery>,
    outcome: SearchOutcome,
}

impl RoomBrowser {
    pub fn new(rooms: Vec<Room>) -> Self {
        Self {
            rooms,
            last_query: None,
            outcome: SearchOutcome::Idle,
        }
    }

    /// Browser over the built-in showcase catalogue
    pub fn showcase() -> Self {
        Self::new(showcase_rooms())
    }

    pub fn catalogue(&self) -> &[Room] {
        &self.rooms
    }

    pub fn outcome(&self) -> &SearchOutcome {
        &self.outcome
    }

    /// Run a search; an invalid range never looks at the rooms
    pub fn search(&mut self, query: AvailabilityQuery) -> &SearchOutcome {
        self.outcome = match query.search(&self.rooms) {
            Ok(found) if found.is_empty() => SearchOutcome::NoneAvailable {
                nights: found.nights,
            },
            Ok(found) => SearchOutcome::Found {
                nights: found.nights,
                matches: self
                    .rooms
                    .iter()
                    .enumerate()
                    .filter(|(_, room)| query.matches(room))
                    .map(|(i, _)| i)
                    .collect(),
            },
            Err(e) => {
                tracing::debug!(error = %e, "Search rejected");
                SearchOutcome::Invalid(e)
            }
        };
        self.last_query = Some(query);
        &self.outcome
    }

    /// Rooms to list for the current outcome
    pub fn results(&self) -> Vec<&Room> {
        match &self.outcome {
            SearchOutcome::Idle | SearchOutcome::Invalid(_) => self.rooms.iter().collect(),
            SearchOutcome::Found { matches, .. } => {
                matches.iter().filter_map(|&i| self.rooms.get(i)).collect()
            }
            SearchOutcome::NoneAvailable { .. } => Vec::new(),
        }
    }

    /// Open the quick view; priced with the last valid search's dates
    pub fn quick_view(&self, id: &RoomId) -> Option<QuickView<'_>> {
        let room = self.rooms.iter().find(|r| &r.id == id)?;
        let quote = self
            .last_query
            .as_ref()
            .and_then(|q| quote(room, q.check_in, q.check_out).ok());
        Some(QuickView { room, quote })
    }
}

#[allow(clippy::too_many_arguments)]
fn showcase_room(
    id: &str,
    name: &str,
    room_type: &str,
    description: &str,
    capacity: u32,
    facilities: &[&str],
    weekday: i64,
    weekend: i64,
    images: &[&str],
) -> Room {
    Room {
        id: RoomId::new(id),
        name: name.to_string(),
        room_type: room_type.to_string(),
        category: "Showcase".to_string(),
        room_number: String::new(),
        description: description.to_string(),
        bed: if capacity > 2 { "King Bed" } else { "Queen Bed" }.to_string(),
        capacity,
        facilities: facilities.iter().map(|f| f.to_string()).collect::<BTreeSet<_>>(),
        images: images.iter().map(|i| i.to_string()).collect(),
        price_weekday: Decimal::new(weekday, 0),
        price_weekend: Decimal::new(weekend, 0),
        status: RoomStatus::Available,
        updated_at: None,
    }
}

/// Built-in catalogue of the public rooms page
pub fn showcase_rooms() -> Vec<Room> {
    vec![
        showcase_room(
            "1",
            "Deluxe Mountain View",
            "Cottage",
            "Kamar nyaman dengan balkon pribadi menghadap pegunungan dan kamar mandi air panas.",
            2,
            &["Bed", "TV", "WiFi", "Shower", "Breakfast"],
            850_000,
            1_100_000,
            &[
                "https://images.unsplash.com/photo-1549488344-99b9a6711516?auto=format&fit=crop&w=800&q=80",
                "https://images.unsplash.com/photo-1571896349842-33c89424de2d?auto=format&fit=crop&w=800&q=80",
            ],
        ),
        showcase_room(
            "2",
            "Family Suite",
            "Villa",
            "Suite luas dengan dua kamar tidur terpisah dan ruang tamu, untuk hingga 4 orang dewasa.",
            4,
            &["Bed", "TV", "WiFi", "Shower", "Breakfast", "Utensils"],
            1_500_000,
            1_950_000,
            &[
                "https://images.unsplash.com/photo-1582234057630-f8f8f26d60a5?auto=format&fit=crop&w=800&q=80",
                "https://images.unsplash.com/photo-1570535973685-618413b91c12?auto=format&fit=crop&w=800&q=80",
            ],
        ),
        showcase_room(
            "3",
            "Luxury Private Villa",
            "Villa",
            "Vila pribadi dengan kolam renang mini, dapur dan layanan butler.",
            6,
            &["Bed", "TV", "WiFi", "Shower", "Breakfast", "Utensils", "Pool"],
            3_200_000,
            4_000_000,
            &[
                "https://images.unsplash.com/photo-1582233470984-b05442578c77?auto=format&fit=crop&w=800&q=80",
                "https://images.unsplash.com/photo-1542382025-b072c4481514?auto=format&fit=crop&w=800&q=80",
            ],
        ),
    ]
}
