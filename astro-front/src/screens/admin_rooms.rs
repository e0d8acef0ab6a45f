//! Admin room inventory screen

use astro_client::RoomRepository;
use shared::error::AppError;
use shared::models::{Room, RoomId, RoomStatus};
use shared::search::RoomFilter;
use std::sync::Arc;

use crate::error::{FrontError, FrontResult};
use crate::forms::{FormMode, RoomForm};
use crate::notify::{Confirm, Notice, Notifier};

/// Header counters of the rooms page, one per status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoomStats {
    pub total: usize,
    pub available: usize,
    pub occupied: usize,
    pub maintenance: usize,
}

impl RoomStats {
    pub fn from_rooms(rooms: &[Room]) -> Self {
        rooms.iter().fold(Self::default(), |mut s, r| {
            s.total += 1;
            match r.status {
                RoomStatus::Available => s.available += 1,
                RoomStatus::Occupied => s.occupied += 1,
                RoomStatus::Maintenance => s.maintenance += 1,
            }
            s
        })
    }
}

/// Room list with search and facets, backed by a [`RoomRepository`]
///
/// Every mutation is followed by a full refetch. Any failure leaves the
/// current list as it was and produces exactly one error notice.
pub struct AdminRoomsScreen<R> {
    repo: R,
    notifier: Arc<dyn Notifier>,
    rooms: Vec<Room>,
    pub filter: RoomFilter,
}

impl<R: RoomRepository> AdminRoomsScreen<R> {
    pub fn new(repo: R, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            repo,
            notifier,
            rooms: Vec::new(),
            filter: RoomFilter::default(),
        }
    }

    /// Initial fetch; on failure the list is left empty
    pub async fn mount(&mut self) -> FrontResult<()> {
        match self.repo.list().await {
            Ok(rooms) => {
                self.rooms = rooms;
                Ok(())
            }
            Err(e) => {
                self.rooms.clear();
                self.notifier
                    .notify(Notice::error(format!("Gagal memuat data kamar: {e}")));
                Err(e.into())
            }
        }
    }

    /// Refetch after a mutation; on failure the previous list stays
    async fn refresh(&mut self) {
        match self.repo.list().await {
            Ok(rooms) => self.rooms = rooms,
            Err(e) => {
                tracing::warn!(error = %e, "Room refetch failed");
                self.notifier
                    .notify(Notice::error(format!("Gagal memuat ulang data kamar: {e}")));
            }
        }
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Rooms after search and facets, in fetch order
    pub fn visible(&self) -> Vec<&Room> {
        self.filter.apply(&self.rooms)
    }

    pub fn find(&self, id: &RoomId) -> Option<&Room> {
        self.rooms.iter().find(|r| &r.id == id)
    }

    /// Counts over the whole list, not just the visible rows
    pub fn stats(&self) -> RoomStats {
        RoomStats::from_rooms(&self.rooms)
    }

    /// Form for a new room, or prefilled from a listed one; an unknown id
    /// is reported once
    pub fn open_form(&self, id: Option<&RoomId>) -> FrontResult<RoomForm> {
        let Some(id) = id else {
            return Ok(RoomForm::create());
        };
        match self.find(id) {
            Some(room) => Ok(RoomForm::edit(room)),
            None => {
                let err = AppError::not_found(format!("Room {id}"));
                self.notifier.notify(Notice::error(err.message.clone()));
                Err(FrontError::from(err))
            }
        }
    }

    /// Validate the form, then create or update depending on its mode
    pub async fn save(&mut self, form: &RoomForm) -> FrontResult<()> {
        let draft = match form.submit() {
            Ok(draft) => draft,
            Err(e) => {
                self.notifier.notify(Notice::error(e.message.clone()));
                return Err(e.into());
            }
        };

        let (result, done) = match &form.mode {
            FormMode::Create => (self.repo.create(&draft).await, "Room berhasil dibuat!"),
            FormMode::Edit(id) => (self.repo.update(id, &draft).await, "Room berhasil diperbarui"),
        };
        if let Err(e) = result {
            self.notifier.notify(Notice::error(e.to_string()));
            return Err(e.into());
        }

        self.notifier.notify(Notice::success(done));
        self.refresh().await;
        Ok(())
    }

    /// Delete after confirmation; returns false when the user declined
    pub async fn delete(&mut self, id: &RoomId, confirm: &dyn Confirm) -> FrontResult<bool> {
        let name = self
            .find(id)
            .map(|r| r.name.clone())
            .unwrap_or_else(|| id.to_string());
        if !confirm.confirm(&format!("Hapus kamar \"{name}\"?")) {
            return Ok(false);
        }

        if let Err(e) = self.repo.delete(id).await {
            self.notifier
                .notify(Notice::error(format!("Gagal menghapus kamar: {e}")));
            return Err(FrontError::from(e));
        }

        self.notifier.notify(Notice::success("Room deleted"));
        self.refresh().await;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{AutoConfirm, RecordingNotifier};
    use crate::screens::testing::{FakeRooms, sample_room};
    use rust_decimal::Decimal;
    use shared::models::ImageSource;
    use shared::search::Facet;

    fn screen(repo: FakeRooms) -> (AdminRoomsScreen<FakeRooms>, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::new());
        (AdminRoomsScreen::new(repo, notifier.clone()), notifier)
    }

    #[tokio::test]
    async fn test_mount_failure_leaves_empty_list() {
        let repo = FakeRooms::with(vec![sample_room("1", "Villa A")]);
        repo.fail_next();
        let (mut screen, notifier) = screen(repo);

        assert!(screen.mount().await.is_err());
        assert!(screen.rooms().is_empty());
        assert_eq!(notifier.errors().len(), 1);
    }

    #[tokio::test]
    async fn test_filter_is_local() {
        let repo = FakeRooms::with(vec![
            sample_room("1", "Executive Suite"),
            sample_room("2", "Pine Cabin"),
        ]);
        let (mut screen, _) = screen(repo.clone());
        screen.mount().await.unwrap();
        let calls = repo.list_calls();

        screen.filter.search = "SUITE".into();
        assert_eq!(screen.visible().len(), 1);
        screen.filter.status = Facet::Only(RoomStatus::Maintenance);
        assert!(screen.visible().is_empty());
        assert_eq!(repo.list_calls(), calls);
    }

    #[tokio::test]
    async fn test_stats_count_every_status() {
        let mut occupied = sample_room("2", "Pine Cabin");
        occupied.status = RoomStatus::Occupied;
        let mut closed = sample_room("3", "Old Dome");
        closed.status = RoomStatus::Maintenance;
        let repo = FakeRooms::with(vec![sample_room("1", "Villa A"), occupied, closed]);
        let (mut screen, _) = screen(repo);
        screen.mount().await.unwrap();

        screen.filter.status = Facet::Only(RoomStatus::Available);
        let stats = screen.stats();
        assert_eq!(
            (stats.total, stats.available, stats.occupied, stats.maintenance),
            (3, 1, 1, 1)
        );
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_repository() {
        let repo = FakeRooms::with(vec![]);
        let (mut screen, notifier) = screen(repo.clone());
        screen.mount().await.unwrap();

        let mut form = screen.open_form(None).unwrap();
        form.name = "Kabin Baru".into();
        form.description = "Kabin".into();
        form.price_weekday = "900000".into();

        let err = screen.save(&form).await.unwrap_err();
        assert_eq!(err.to_string(), "Minimal upload 1 gambar");
        assert_eq!(repo.mutations(), 0);
        assert_eq!(notifier.errors().len(), 1);
    }

    #[tokio::test]
    async fn test_create_refetches() {
        let repo = FakeRooms::with(vec![sample_room("1", "Villa A")]);
        let (mut screen, notifier) = screen(repo.clone());
        screen.mount().await.unwrap();

        let mut form = screen.open_form(None).unwrap();
        form.name = "Kabin Baru".into();
        form.description = "Kabin".into();
        form.price_weekday = "900000".into();
        form.add_image(ImageSource::Url("https://img.astro.id/k.jpg".into()));
        screen.save(&form).await.unwrap();

        assert_eq!(screen.rooms().len(), 2);
        assert_eq!(screen.rooms()[1].price_weekday, Decimal::new(900_000, 0));
        assert!(notifier.errors().is_empty());
    }

    #[tokio::test]
    async fn test_failed_update_keeps_list() {
        let repo = FakeRooms::with(vec![sample_room("1", "Villa A")]);
        let (mut screen, notifier) = screen(repo.clone());
        screen.mount().await.unwrap();
        let before = screen.rooms().to_vec();

        let mut form = screen.open_form(Some(&RoomId::new("1"))).unwrap();
        form.name = "Villa B".into();
        repo.fail_next();
        assert!(screen.save(&form).await.is_err());

        assert_eq!(screen.rooms(), before.as_slice());
        assert_eq!(notifier.notices().len(), 1);
        assert_eq!(notifier.errors()[0].message, "injected failure");
    }

    #[tokio::test]
    async fn test_unknown_id_reports_once() {
        let (mut screen, notifier) = screen(FakeRooms::with(vec![sample_room("1", "Villa A")]));
        screen.mount().await.unwrap();

        let err = screen.open_form(Some(&RoomId::new("9"))).unwrap_err();
        assert!(matches!(err, FrontError::Invalid(_)));
        assert_eq!(notifier.errors().len(), 1);
        assert_eq!(notifier.errors()[0].message, "Room 9 not found");
        assert!(screen.open_form(None).is_ok());
        assert_eq!(notifier.notices().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_requires_confirmation() {
        let repo = FakeRooms::with(vec![sample_room("1", "Villa A")]);
        let (mut screen, _) = screen(repo.clone());
        screen.mount().await.unwrap();

        let id = RoomId::new("1");
        assert!(!screen.delete(&id, &AutoConfirm(false)).await.unwrap());
        assert_eq!(repo.mutations(), 0);

        assert!(screen.delete(&id, &AutoConfirm(true)).await.unwrap());
        assert!(screen.rooms().is_empty());
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_item() {
        let repo = FakeRooms::with(vec![sample_room("1", "Villa A")]);
        let (mut screen, notifier) = screen(repo.clone());
        screen.mount().await.unwrap();

        repo.fail_next();
        assert!(screen.delete(&RoomId::new("1"), &AutoConfirm(true)).await.is_err());
        assert_eq!(screen.rooms().len(), 1);
        assert_eq!(notifier.errors().len(), 1);
    }
}
