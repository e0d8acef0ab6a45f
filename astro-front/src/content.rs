//! Static marketing content

use crate::routing::Facility;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomePage {
    pub headline: &'static str,
    pub tagline: &'static str,
    pub slides: Vec<&'static str>,
    pub highlights: Vec<Highlight>,
    pub advantages: Vec<Highlight>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacilityPage {
    pub facility: Facility,
    pub title: &'static str,
    pub blurb: &'static str,
    pub features: Vec<&'static str>,
}

pub fn home_page() -> HomePage {
    HomePage {
        headline: "Astro Ciater",
        tagline: "Destinasi wisata alam terbaik di Ciater, Subang",
        slides: vec![
            "Escape to Nature",
            "Glamping Experience",
            "Culinary Delights",
            "Tea Plantation Views",
        ],
        highlights: vec![
            Highlight {
                title: "Restoran Alam",
                description: "Hidangan lokal dan internasional dengan pemandangan kebun teh.",
            },
            Highlight {
                title: "Glamping Experience",
                description: "Camping mewah yang nyaman di tengah alam dengan fasilitas lengkap.",
            },
            Highlight {
                title: "Aktivitas Alam",
                description: "Trekking, tea walk dan kegiatan outdoor untuk semua usia.",
            },
        ],
        advantages: vec![
            Highlight {
                title: "Lokasi Strategis",
                description: "Akses mudah di Ciater, Subang dengan pemandangan pegunungan.",
            },
            Highlight {
                title: "Udara Sejuk",
                description: "Udara pegunungan yang sejuk dan segar sepanjang hari.",
            },
            Highlight {
                title: "Kebun Teh Asri",
                description: "Dikelilingi hamparan kebun teh hijau.",
            },
            Highlight {
                title: "Spot Foto Instagramable",
                description: "Banyak spot foto untuk mengabadikan momen.",
            },
            Highlight {
                title: "Fasilitas Lengkap",
                description: "Fasilitas modern untuk kenyamanan maksimal.",
            },
            Highlight {
                title: "Pelayanan Terbaik",
                description: "Tim profesional siap melayani selama Anda menginap.",
            },
        ],
    }
}

pub fn facility_page(facility: Facility) -> FacilityPage {
    let (title, blurb, features) = match facility {
        Facility::SwimmingPools => (
            "Swimming Pools",
            "Kolam air panas alami dan kolam keluarga yang buka setiap hari.",
            vec!["Kolam air panas", "Kolam anak", "Gazebo tepi kolam"],
        ),
        Facility::FitnessCentre => (
            "Fitness Centre",
            "Ruang kebugaran dengan peralatan modern dan kelas yoga pagi.",
            vec!["Peralatan kardio", "Kelas yoga", "Ruang ganti"],
        ),
        Facility::AdventurePark => (
            "Adventure Park",
            "Flying fox, jembatan gantung dan jalur ATV di kawasan hutan pinus.",
            vec!["Flying fox", "Jalur ATV", "Outbound keluarga"],
        ),
        Facility::Transportation => (
            "Transportation",
            "Antar jemput dari Bandung dan Subang serta shuttle di dalam area resort.",
            vec!["Antar jemput bandara", "Shuttle resort", "Sewa motor"],
        ),
    };
    FacilityPage {
        facility,
        title,
        blurb,
        features,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_facility_has_a_page() {
        for f in Facility::ALL {
            let page = facility_page(f);
            assert_eq!(page.facility, f);
            assert!(!page.title.is_empty());
            assert!(!page.features.is_empty());
        }
    }

    #[test]
    fn test_home_page() {
        let page = home_page();
        assert_eq!(page.slides.len(), 4);
        assert_eq!(page.highlights.len(), 3);
        assert_eq!(page.advantages.len(), 6);
    }
}
