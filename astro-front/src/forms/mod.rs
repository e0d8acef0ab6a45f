//! Form models behind the create/edit modals
//!
//! Each form holds raw input strings the way the modal's controlled inputs
//! do, and `submit` turns them into a validated draft. A form that fails
//! validation never produces a draft, so the save path cannot run.

mod room_form;
mod user_form;

pub use room_form::{FacilityOption, RoomForm};
pub use user_form::UserForm;

use rust_decimal::Decimal;
use shared::error::{AppError, ErrorCode};
use std::str::FromStr;

/// Create or edit, decided only by whether an initial entity was given
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode<Id> {
    Create,
    Edit(Id),
}

impl<Id> FormMode<Id> {
    pub fn is_create(&self) -> bool {
        matches!(self, Self::Create)
    }

}

/// Parse a rupiah amount as typed: `850000`, `850.000`, `Rp 1.100.000`,
/// `1250000,50`
pub fn parse_amount(input: &str) -> Option<Decimal> {
    let cleaned: String = input
        .trim()
        .trim_start_matches("Rp")
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    if cleaned.contains(',') || is_dot_grouped(&cleaned) {
        // id-ID: dots group thousands, the comma marks decimals
        return Decimal::from_str(&cleaned.replace('.', "").replace(',', ".")).ok();
    }
    Decimal::from_str(&cleaned).ok()
}

/// Prefill text for an amount that [`parse_amount`] reads back unchanged
///
/// Trailing zeros are dropped and the decimal separator is the id-ID comma,
/// so `250.000` (scale 3) becomes `250` rather than a dot-grouped thousand.
pub fn amount_input(amount: Decimal) -> String {
    amount.normalize().to_string().replace('.', ",")
}

/// `1.100.000` style: a 1-3 digit head followed by dot-separated triples
fn is_dot_grouped(s: &str) -> bool {
    let mut groups = s.split('.');
    let head_ok = groups
        .next()
        .is_some_and(|h| (1..=3).contains(&h.len()) && h.chars().all(|c| c.is_ascii_digit()));
    let rest: Vec<&str> = groups.collect();
    head_ok
        && !rest.is_empty()
        && rest
            .iter()
            .all(|g| g.len() == 3 && g.chars().all(|c| c.is_ascii_digit()))
}

fn invalid_field(field: &str, message: &str) -> AppError {
    AppError::with_message(ErrorCode::ValidationFailed, message).with_detail("field", field)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("850000"), Some(Decimal::new(850_000, 0)));
        assert_eq!(parse_amount("850.000"), Some(Decimal::new(850_000, 0)));
        assert_eq!(parse_amount("Rp 1.100.000"), Some(Decimal::new(1_100_000, 0)));
        assert_eq!(parse_amount("1250000,50"), Some(Decimal::new(125_000_050, 2)));
        assert_eq!(parse_amount("1.5"), Some(Decimal::new(15, 1)));
        assert_eq!(parse_amount("  "), None);
        assert_eq!(parse_amount("gratis"), None);
    }

    #[test]
    fn test_amount_input_round_trips() {
        for amount in [
            Decimal::new(250_000, 3),
            Decimal::new(1_125, 3),
            Decimal::new(1_500_000, 0),
            Decimal::new(125_000_050, 2),
            Decimal::ZERO,
        ] {
            assert_eq!(parse_amount(&amount_input(amount)), Some(amount), "{amount}");
        }
        assert_eq!(amount_input(Decimal::new(250_000, 3)), "250");
    }

    #[test]
    fn test_form_mode() {
        let create: FormMode<String> = FormMode::Create;
        assert!(create.is_create());
        assert!(!FormMode::Edit("r1").is_create());
    }
}
