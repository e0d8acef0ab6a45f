//! Plain-text rendering of pages for the terminal

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use shared::models::{Booking, Room, User};
use shared::search::StayQuote;

use crate::content::{FacilityPage, HomePage};
use crate::routing::{Chrome, SIDEBAR};
use crate::screens::{Dashboard, RoomStats, UserStats};

/// Format an amount the id-ID way, rounded to whole rupiah
///
/// # Examples
///
/// ```
/// use astro_front::render::format_idr;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_idr(Decimal::new(850_000, 0)), "Rp 850.000");
/// assert_eq!(format_idr(Decimal::new(45, 0)), "Rp 45");
/// ```
pub fn format_idr(amount: Decimal) -> String {
    let rounded = amount.round().to_i128().unwrap_or_default();
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    if rounded < 0 {
        format!("-Rp {grouped}")
    } else {
        format!("Rp {grouped}")
    }
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(width.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}

pub fn room_table(rooms: &[&Room]) -> String {
    if rooms.is_empty() {
        return "Tidak ada kamar.".to_string();
    }
    let mut lines = vec![format!(
        "{:<26} {:<9} {:<8} {:>4} {:>14} {:>14} {:<10} {:<11} {}",
        "NAMA", "TIPE", "NO", "KAP", "WEEKDAY", "WEEKEND", "STATUS", "DIPERBARUI", "ID"
    )];
    for room in rooms {
        lines.push(format!(
            "{:<26} {:<9} {:<8} {:>4} {:>14} {:>14} {:<10} {:<11} {}",
            truncate(&room.name, 26),
            truncate(&room.room_type, 9),
            truncate(&room.room_number, 8),
            room.capacity,
            format_idr(room.price_weekday),
            format_idr(room.price_weekend),
            room.status.label(),
            room.updated_label(),
            room.id,
        ));
    }
    lines.join("\n")
}

/// Card with description, facilities and prices; `quote` adds the stay total
pub fn room_card(room: &Room, quote: Option<&StayQuote>) -> String {
    let mut lines = vec![
        format!("{} ({})", room.name, room.room_type),
        room.description.clone(),
        format!("Kasur: {} · Kapasitas: {} orang", room.bed, room.capacity),
    ];
    if !room.facilities.is_empty() {
        let list: Vec<&str> = room.facilities.iter().map(String::as_str).collect();
        lines.push(format!("Fasilitas: {}", list.join(", ")));
    }
    lines.push(format!(
        "Weekday: {} / malam · Weekend: {} / malam",
        format_idr(room.price_weekday),
        format_idr(room.price_weekend)
    ));
    lines.push(format!("Foto: {}", room.cover_image()));
    if let Some(q) = quote {
        lines.push(format!(
            "Total {} malam ({} weekday, {} weekend): {}",
            q.nights(),
            q.weekday_nights,
            q.weekend_nights,
            format_idr(q.total)
        ));
    }
    lines.join("\n")
}

pub fn user_table(users: &[&User]) -> String {
    if users.is_empty() {
        return "Tidak ada pengguna.".to_string();
    }
    let mut lines = vec![format!(
        "{:<3} {:<24} {:<28} {:<14} {:<12} {:<11} {}",
        "", "NAMA", "EMAIL", "TELEPON", "ROLE", "BERGABUNG", "ID"
    )];
    for user in users {
        lines.push(format!(
            "{:<3} {:<24} {:<28} {:<14} {:<12} {:<11} {}",
            user.initials(),
            truncate(&user.name, 24),
            truncate(&user.email, 28),
            truncate(&user.phone, 14),
            user.role,
            user.joined_label(),
            user.id,
        ));
    }
    lines.join("\n")
}

pub fn room_stats(stats: &RoomStats) -> String {
    format!(
        "Total: {} · Tersedia: {} · Terisi: {} · Perbaikan: {}",
        stats.total, stats.available, stats.occupied, stats.maintenance
    )
}

pub fn user_stats(stats: &UserStats) -> String {
    format!(
        "Total: {} · Aktif: {} · Resepsionis: {} · Admin: {}",
        stats.total, stats.active, stats.receptionists, stats.admins
    )
}

pub fn dashboard(dashboard: &Dashboard) -> String {
    let mut lines = vec!["Dashboard Admin".to_string()];
    for stat in &dashboard.stats {
        lines.push(format!("  {:<22} {:>10}  {}", stat.title, stat.value, stat.change));
    }
    lines.push(String::new());
    lines.push("Reservasi Terbaru".to_string());
    for r in &dashboard.latest_reservations {
        lines.push(format!(
            "  {:<14} {:<18} {}  {:>12}  {}",
            r.guest,
            r.package,
            r.date,
            format_idr(r.amount),
            r.status
        ));
    }
    lines.push(String::new());
    let actions: Vec<&str> = dashboard.quick_actions.iter().map(|a| a.title).collect();
    lines.push(format!("Aksi Cepat: {}", actions.join(" | ")));
    lines.join("\n")
}

pub fn bookings(bookings: &[Booking]) -> String {
    if bookings.is_empty() {
        return "Anda belum memiliki pemesanan.".to_string();
    }
    let mut lines = vec!["Pemesanan Saya".to_string()];
    for b in bookings {
        lines.push(format!(
            "  #{} {:<22} {} → {} ({} malam)  {}",
            b.id,
            b.room_name,
            b.check_in,
            b.check_out,
            b.nights(),
            b.payment_status
        ));
    }
    lines.join("\n")
}

pub fn home(page: &HomePage) -> String {
    let mut lines = vec![page.headline.to_string(), page.tagline.to_string(), String::new()];
    for h in &page.highlights {
        lines.push(format!("* {}: {}", h.title, h.description));
    }
    lines.push(String::new());
    for a in &page.advantages {
        lines.push(format!("- {}: {}", a.title, a.description));
    }
    lines.join("\n")
}

pub fn facility(page: &FacilityPage) -> String {
    let mut lines = vec![page.title.to_string(), page.blurb.to_string()];
    lines.extend(page.features.iter().map(|f| format!("- {f}")));
    lines.join("\n")
}

/// Frame around a rendered page body
pub fn frame(path: &str, body: &str) -> String {
    let chrome = Chrome::for_path(path);
    let mut parts = Vec::new();
    if chrome.navbar {
        parts.push("Astro Ciater | Home · Rooms · Facilities · My Bookings".to_string());
    }
    if chrome.sidebar {
        let items: Vec<&str> = SIDEBAR.iter().map(|i| i.label).collect();
        parts.push(format!("[{}]", items.join(" · ")));
    }
    parts.push(body.to_string());
    if chrome.footer {
        parts.push("© Astro Ciater, Subang".to_string());
    }
    parts.join("\n\n")
}
