//! Screens
//!
//! Each screen owns its local list state and talks to the backend only
//! through the repository traits. Fetch on mount, derive the filtered view
//! in memory, refetch wholesale after a successful mutation.

mod admin_rooms;
mod admin_users;
mod bookings;
mod dashboard;
mod login;
mod room_browser;

#[cfg(test)]
pub(crate) mod testing;

pub use admin_rooms::{AdminRoomsScreen, RoomStats};
pub use admin_users::{AdminUsersScreen, UserStats};
pub use bookings::my_bookings;
pub use dashboard::{Dashboard, QuickAction, ReservationSummary, StatCard};
pub use login::LoginScreen;
pub use room_browser::{
    INVALID_RANGE_MESSAGE, NO_ROOMS_MESSAGE, QuickView, RoomBrowser, SearchOutcome,
    showcase_rooms,
};
