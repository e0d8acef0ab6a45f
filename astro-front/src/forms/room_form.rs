//! Room create/edit form

use shared::error::{AppError, ErrorCode};
use shared::models::{
    DEFAULT_BED, DEFAULT_CAPACITY, DEFAULT_ROOM_TYPE, FACILITY_VOCABULARY, ImageSource, Room,
    RoomDraft, RoomId, RoomStatus,
};
use shared::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, from_validation_errors,
    validate_optional_text, validate_required_text,
};
use std::collections::BTreeSet;
use validator::Validate;

use super::{FormMode, amount_input, invalid_field, parse_amount};

/// Alert shown when a new room has no image
pub const IMAGE_REQUIRED_ALERT: &str = "Minimal upload 1 gambar";

/// One checkbox in the facilities group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacilityOption {
    pub label: String,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoomForm {
    pub mode: FormMode<RoomId>,
    pub name: String,
    pub description: String,
    pub room_number: String,
    pub room_type: String,
    pub category: String,
    pub bed: String,
    pub capacity: String,
    pub price_weekday: String,
    /// Blank means "same as weekday"
    pub price_weekend: String,
    pub status: RoomStatus,
    pub facilities: BTreeSet<String>,
    /// Newly chosen images; on edit, none keeps the stored ones
    pub images: Vec<ImageSource>,
    /// Images already stored for the edited room (display only)
    pub existing_images: Vec<String>,
    /// Labels the edited room had outside the vocabulary
    extra_facilities: BTreeSet<String>,
}

impl RoomForm {
    /// Empty form in create mode, or a form prefilled from `initial`
    pub fn new(initial: Option<&Room>) -> Self {
        match initial {
            Some(room) => Self::edit(room),
            None => Self::create(),
        }
    }

    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            name: String::new(),
            description: String::new(),
            room_number: String::new(),
            room_type: DEFAULT_ROOM_TYPE.to_string(),
            category: String::new(),
            bed: DEFAULT_BED.to_string(),
            capacity: DEFAULT_CAPACITY.to_string(),
            price_weekday: String::new(),
            price_weekend: String::new(),
            status: RoomStatus::Available,
            facilities: BTreeSet::new(),
            images: Vec::new(),
            existing_images: Vec::new(),
            extra_facilities: BTreeSet::new(),
        }
    }

    pub fn edit(room: &Room) -> Self {
        let extra_facilities = room
            .facilities
            .iter()
            .filter(|f| !FACILITY_VOCABULARY.contains(&f.as_str()))
            .cloned()
            .collect();
        Self {
            mode: FormMode::Edit(room.id.clone()),
            name: room.name.clone(),
            description: room.description.clone(),
            room_number: room.room_number.clone(),
            room_type: room.room_type.clone(),
            category: room.category.clone(),
            bed: room.bed.clone(),
            capacity: room.capacity.to_string(),
            price_weekday: amount_input(room.price_weekday),
            price_weekend: amount_input(room.price_weekend),
            status: room.status,
            facilities: room.facilities.clone(),
            images: Vec::new(),
            existing_images: room.images.clone(),
            extra_facilities,
        }
    }

    /// Checkbox list: the fixed vocabulary, then labels the edited room
    /// brought along
    pub fn facility_options(&self) -> Vec<FacilityOption> {
        FACILITY_VOCABULARY
            .iter()
            .map(|label| label.to_string())
            .chain(self.extra_facilities.iter().cloned())
            .map(|label| FacilityOption {
                checked: self.facilities.contains(&label),
                label,
            })
            .collect()
    }

    /// Flip one checkbox; returns the new state. Labels that are not on
    /// the list are ignored.
    pub fn toggle_facility(&mut self, label: &str) -> bool {
        let known = FACILITY_VOCABULARY.contains(&label) || self.extra_facilities.contains(label);
        if !known {
            return false;
        }
        if self.facilities.remove(label) {
            false
        } else {
            self.facilities.insert(label.to_string());
            true
        }
    }

    pub fn add_image(&mut self, image: ImageSource) {
        self.images.push(image);
    }

    /// Validate and build the payload handed to the save path
    pub fn submit(&self) -> Result<RoomDraft, AppError> {
        let capacity = self
            .capacity
            .trim()
            .parse::<u32>()
            .map_err(|_| invalid_field("capacity", "Kapasitas minimal 1 orang"))?;
        let price_weekday = parse_amount(&self.price_weekday)
            .ok_or_else(|| invalid_field("price_weekday", "Harga wajib diisi"))?;
        let price_weekend = if self.price_weekend.trim().is_empty() {
            price_weekday
        } else {
            parse_amount(&self.price_weekend)
                .ok_or_else(|| invalid_field("price_weekend", "Harga weekend tidak valid"))?
        };

        let draft = RoomDraft {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            room_number: self.room_number.trim().to_string(),
            room_type: non_blank_or(&self.room_type, DEFAULT_ROOM_TYPE),
            category: self.category.trim().to_string(),
            bed: self.bed.trim().to_string(),
            capacity,
            price_weekday,
            price_weekend,
            status: self.status,
            facilities: self.facilities.clone(),
            images: self.images.clone(),
        };

        draft.validate().map_err(|e| from_validation_errors(&e))?;
        validate_required_text(&draft.name, "name", MAX_NAME_LEN)?;
        validate_required_text(&draft.description, "description", MAX_NOTE_LEN)?;
        validate_required_text(&draft.bed, "bed", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&Some(draft.room_number.clone()), "room_number", MAX_SHORT_TEXT_LEN)?;

        if self.mode.is_create() && draft.has_no_images() {
            return Err(AppError::with_message(
                ErrorCode::RoomImageRequired,
                IMAGE_REQUIRED_ALERT,
            ));
        }
        Ok(draft)
    }
}

fn non_blank_or(value: &str, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shared::models::PLACEHOLDER_IMAGE;

    fn filled() -> RoomForm {
        let mut form = RoomForm::create();
        form.name = "Glamping Dome Sunrise".into();
        form.description = "Dome transparan menghadap kebun teh".into();
        form.room_number = "G-02".into();
        form.capacity = "2".into();
        form.price_weekday = "850.000".into();
        form.add_image(ImageSource::Url(PLACEHOLDER_IMAGE.into()));
        form
    }

    fn stored_room() -> Room {
        Room {
            id: RoomId::new("r1"),
            name: "Pine Forest Cabin".into(),
            room_type: "Cabin".into(),
            category: "Standard".into(),
            room_number: "C-03".into(),
            description: "Kabin kayu".into(),
            bed: "Twin Bed".into(),
            capacity: 4,
            facilities: BTreeSet::from(["WiFi".to_string(), "Sauna".to_string()]),
            images: vec!["/uploads/rooms/c03.jpg".into()],
            price_weekday: Decimal::new(1_200_000, 0),
            price_weekend: Decimal::new(1_500_000, 0),
            status: RoomStatus::Maintenance,
            updated_at: None,
        }
    }

    #[test]
    fn test_mode_from_initial() {
        assert!(RoomForm::new(None).mode.is_create());
        let form = RoomForm::new(Some(&stored_room()));
        assert_eq!(form.mode, FormMode::Edit(RoomId::new("r1")));
        assert_eq!(form.capacity, "4");
        assert_eq!(form.existing_images.len(), 1);
        assert!(form.images.is_empty());
    }

    #[test]
    fn test_submit_builds_draft() {
        let draft = filled().submit().unwrap();
        assert_eq!(draft.price_weekday, Decimal::new(850_000, 0));
        // blank weekend price follows weekday
        assert_eq!(draft.price_weekend, draft.price_weekday);
        assert_eq!(draft.room_type, "Glamping");
        assert_eq!(draft.capacity, 2);
    }

    #[test]
    fn test_create_requires_image() {
        let mut form = filled();
        form.images.clear();
        let err = form.submit().unwrap_err();
        assert_eq!(err.code, ErrorCode::RoomImageRequired);
        assert_eq!(err.message, IMAGE_REQUIRED_ALERT);
    }

    #[test]
    fn test_edit_without_new_image_is_fine() {
        let draft = RoomForm::edit(&stored_room()).submit().unwrap();
        assert!(draft.images.is_empty());
        assert_eq!(draft.status, RoomStatus::Maintenance);
    }

    #[test]
    fn test_unchanged_edit_keeps_prices() {
        let mut room = stored_room();
        // "250.000" as backend text decodes with scale 3
        room.price_weekday = Decimal::new(250_000, 3);
        room.price_weekend = Decimal::new(1_950_000, 0);
        let form = RoomForm::edit(&room);
        assert_eq!(form.price_weekday, "250");

        let draft = form.submit().unwrap();
        assert_eq!(draft.price_weekday, Decimal::new(250, 0));
        assert_eq!(draft.price_weekend, Decimal::new(1_950_000, 0));
    }

    #[test]
    fn test_required_fields() {
        let mut form = filled();
        form.name = "   ".into();
        assert_eq!(form.submit().unwrap_err().message, "Nama kamar wajib diisi");

        let mut form = filled();
        form.capacity = "0".into();
        assert_eq!(form.submit().unwrap_err().message, "Kapasitas minimal 1 orang");

        let mut form = filled();
        form.capacity = "dua".into();
        assert!(form.submit().is_err());

        let mut form = filled();
        form.price_weekday.clear();
        assert_eq!(form.submit().unwrap_err().message, "Harga wajib diisi");

        let mut form = filled();
        form.bed.clear();
        assert_eq!(form.submit().unwrap_err().message, "Tipe kasur wajib diisi");

        let mut form = filled();
        form.description.clear();
        assert_eq!(form.submit().unwrap_err().message, "Deskripsi wajib diisi");
    }

    #[test]
    fn test_facilities_checkbox_set() {
        let mut form = RoomForm::edit(&stored_room());
        let options = form.facility_options();
        assert_eq!(options.len(), FACILITY_VOCABULARY.len() + 1);
        let sauna = options.last().unwrap();
        assert_eq!(sauna.label, "Sauna");
        assert!(sauna.checked);

        assert!(!form.toggle_facility("Sauna"));
        assert!(!form.facilities.contains("Sauna"));
        // still offered after being unchecked
        assert!(form.facility_options().iter().any(|o| o.label == "Sauna"));

        assert!(form.toggle_facility("Kitchen"));
        assert!(!form.toggle_facility("Helipad"));
        assert!(!form.facilities.contains("Helipad"));

        let draft = form.submit().unwrap();
        assert_eq!(
            draft.facilities,
            BTreeSet::from(["Kitchen".to_string(), "WiFi".to_string()])
        );
    }
}
