//! Admin dashboard with fixed figures

use rust_decimal::Decimal;

use crate::routing::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub change: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationSummary {
    pub guest: &'static str,
    pub package: &'static str,
    pub date: &'static str,
    pub amount: Decimal,
    pub status: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickAction {
    pub title: &'static str,
    /// Page the action opens, when one exists
    pub target: Option<Route>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub stats: Vec<StatCard>,
    pub latest_reservations: Vec<ReservationSummary>,
    pub quick_actions: Vec<QuickAction>,
}

impl Dashboard {
    pub fn load() -> Self {
        Self {
            stats: vec![
                StatCard {
                    title: "Total Reservasi",
                    value: "156".into(),
                    change: "+12% dari bulan lalu",
                },
                StatCard {
                    title: "Pengunjung Hari Ini",
                    value: "24".into(),
                    change: "+8% dari bulan lalu",
                },
                StatCard {
                    title: "Pendapatan Bulan Ini",
                    value: "Rp 45.2M".into(),
                    change: "+15% dari bulan lalu",
                },
                StatCard {
                    title: "Rating Rata-rata",
                    value: "4.8".into(),
                    change: "+0.2 dari bulan lalu",
                },
            ],
            latest_reservations: vec![
                ReservationSummary {
                    guest: "Budi Santoso",
                    package: "Glamping Premium",
                    date: "2024-01-15",
                    amount: Decimal::new(850_000, 0),
                    status: "Dikonfirmasi",
                },
                ReservationSummary {
                    guest: "Sari Dewi",
                    package: "Restoran Alam",
                    date: "2024-01-14",
                    amount: Decimal::new(320_000, 0),
                    status: "Menunggu",
                },
                ReservationSummary {
                    guest: "Ahmad Rizki",
                    package: "Paket Aktivitas",
                    date: "2024-01-13",
                    amount: Decimal::new(450_000, 0),
                    status: "Dikonfirmasi",
                },
            ],
            quick_actions: vec![
                QuickAction {
                    title: "Tambah Reservasi",
                    target: None,
                },
                QuickAction {
                    title: "Buat Konten",
                    target: None,
                },
                QuickAction {
                    title: "Kirim Notifikasi",
                    target: None,
                },
                QuickAction {
                    title: "Lihat Laporan",
                    target: Some(Route::AdminDashboard),
                },
            ],
        }
    }
}
