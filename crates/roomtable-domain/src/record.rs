//! Lodging inventory records
//!
//! Field declaration order is significant: it is the column order of CSV
//! renderings and must stay in sync with [`crate::schema::ROOM_FIELDS`].

use serde::{Deserialize, Serialize};

/// One row of lodging inventory.
///
/// Season dates are kept as strings: source documents carry them in too many
/// formats to normalize reliably at extraction time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomRecord {
    /// Sample group the record was extracted under
    pub sample_group: String,

    /// Supplier name (the company providing the room)
    pub supplier: String,

    /// Property name
    pub property: String,

    /// Item name (the bookable room as listed)
    pub item: String,

    /// Bed/room configuration (e.g. "Queen bed & 2 x set of bunks")
    pub room_config: String,

    /// Season start date as written in the source
    pub season_start_date: String,

    /// Season end date as written in the source
    pub season_end_date: String,

    /// Maximum occupancy for the item
    pub item_max_pax: i64,

    /// Recommended retail price per adult
    pub price_rrp_adult_cost: f64,

    /// Item identifier
    pub item_id: i64,

    /// Whether the item is priced per person rather than per room
    pub item_per_person: bool,

    /// Whether the item is live
    pub is_item_live: bool,

    /// Whether the room configuration is active
    pub is_room_config_active: bool,

    /// Property identifier
    pub property_id: i64,

    /// Property street address (where the room is located)
    pub property_address: String,

    /// Whether the property is active
    pub is_property_active: bool,

    /// Supplier identifier
    pub supplier_id: i64,

    /// Supplier street address
    pub supplier_address: String,

    /// Whether the supplier is active
    pub is_supplier_active: bool,

    /// Season type (e.g. peak, off peak)
    pub season_type: String,

    /// Season name
    pub season: String,

    /// Season applies on Mondays
    pub is_season_monday: bool,

    /// Season applies on Tuesdays
    pub is_season_tuesday: bool,

    /// Season applies on Wednesdays
    pub is_season_wednesday: bool,

    /// Season applies on Thursdays
    pub is_season_thursday: bool,

    /// Season applies on Fridays
    pub is_season_friday: bool,

    /// Season applies on Saturdays
    pub is_season_saturday: bool,

    /// Season applies on Sundays
    pub is_season_sunday: bool,

    /// Whether the season has been deleted
    pub is_season_deleted: bool,

    /// Minimum stay in days
    pub min_days: i64,

    /// Maximum stay in days
    pub max_days: i64,

    /// Adjusted price per adult
    pub price_adj_adult_cost: f64,

    /// Whether the price is live
    pub is_price_live: bool,

    /// Whether the price has been deleted
    pub is_price_deleted: bool,
}

/// The validated output of one document extraction.
///
/// Serializes as `{"rooms": [...]}`. Record order follows the order the
/// backend reported them in; the table is immutable once validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomTable {
    /// Extracted room records, in reported order
    pub rooms: Vec<RoomRecord>,
}

impl RoomTable {
    /// Whether the extraction found no rooms.
    ///
    /// An empty table is a valid outcome (a document with no lodging data),
    /// distinct from a failed extraction.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Number of extracted records.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }
}
