//! "My bookings" page
//!
//! There is no booking API; the page shows a fixed seed.

use chrono::NaiveDate;
use shared::models::{Booking, PaymentStatus};

pub fn my_bookings() -> Vec<Booking> {
    let seed = [
        (
            "1",
            "Deluxe Mountain View",
            "https://images.unsplash.com/photo-1549488344-99b9a6711516?auto=format&fit=crop&w=800&q=80",
            (2025, 11, 2),
            (2025, 11, 5),
            PaymentStatus::Paid,
        ),
        (
            "2",
            "Family Suite",
            "https://images.unsplash.com/photo-1582234057630-f8f8f26d60a5?auto=format&fit=crop&w=800&q=80",
            (2025, 12, 10),
            (2025, 12, 15),
            PaymentStatus::Pending,
        ),
    ];

    seed.into_iter()
        .filter_map(|(id, room, image, (iy, im, id_), (oy, om, od), status)| {
            Some(Booking {
                id: id.to_string(),
                room_name: room.to_string(),
                image: image.to_string(),
                check_in: NaiveDate::from_ymd_opt(iy, im, id_)?,
                check_out: NaiveDate::from_ymd_opt(oy, om, od)?,
                payment_status: status,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed() {
        let bookings = my_bookings();
        assert_eq!(bookings.len(), 2);
        assert_eq!(bookings[0].nights(), 3);
        assert_eq!(bookings[0].payment_status, PaymentStatus::Paid);
        assert_eq!(bookings[1].nights(), 5);
        assert_eq!(bookings[1].payment_status.to_string(), "Pending");
    }
}
