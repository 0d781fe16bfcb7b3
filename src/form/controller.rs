// src/form/controller.rs - state form: nilai, error, reveal, guard submit

use std::collections::BTreeMap;

use log::debug;
use thiserror::Error;

use super::FormValues;
use super::fields::{self, Field};
use super::schema::ValidationSchema;

/// Status field turunan, di-key dengan nama field.
///
/// `revealed` menentukan apakah jurusan / detail pengalaman ikut dirender;
/// `touched` menandai select yang sudah pernah dipilih dan dipakai untuk
/// menahan pesan "belum dipilih" setelah interaksi pertama.
#[derive(Debug, Default, Clone)]
pub struct RevealState {
    revealed: BTreeMap<&'static str, bool>,
    touched: BTreeMap<&'static str, bool>,
}

impl RevealState {
    pub fn is_revealed(&self, field: &str) -> bool {
        self.revealed.get(field).copied().unwrap_or(false)
    }

    pub fn is_touched(&self, field: &str) -> bool {
        self.touched.get(field).copied().unwrap_or(false)
    }

    fn set_revealed(&mut self, field: &'static str, on: bool) {
        self.revealed.insert(field, on);
    }

    fn mark_touched(&mut self, field: &'static str) {
        self.touched.insert(field, true);
    }

    fn clear(&mut self) {
        self.revealed.clear();
        self.touched.clear();
    }
}

/// Submit ditolak karena masih ada pengiriman yang berlangsung.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("pengiriman masih berlangsung")]
pub struct SubmitInFlight;

/// Pemilik state form: nilai field, error hasil validasi, reveal state,
/// dan guard anti submit ganda.
#[derive(Debug, Default)]
pub struct FormController {
    values: FormValues,
    errors: BTreeMap<&'static str, String>,
    reveal: RevealState,
    in_flight: bool,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn set_value(&mut self, field: &'static str, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn reveal(&self) -> &RevealState {
        &self.reveal
    }

    /// Handler perubahan select pendidikan: jurusan tampil hanya untuk
    /// S1/S2, selain itu disembunyikan.
    pub fn education_changed(&mut self, value: &str) {
        debug!("education value: {value}");
        self.set_value(fields::EDUCATION, value);
        self.reveal.set_revealed(fields::MAJOR, matches!(value, "S1" | "S2"));
        self.reveal.mark_touched(fields::EDUCATION);
    }

    /// Handler perubahan select pengalaman koding: detail tampil untuk
    /// "Ada", sembunyi untuk "Tidak Ada".
    pub fn coding_experience_changed(&mut self, value: &str) {
        debug!("coding experience value: {value}");
        self.set_value(fields::CODING_EXPERIENCE, value);
        self.reveal.set_revealed(fields::EXPERIENCE_DETAIL, value == "Ada");
        self.reveal.mark_touched(fields::CODING_EXPERIENCE);
    }

    /// Field biasa selalu tampil; jurusan dan detail pengalaman mengikuti
    /// reveal state. Menyembunyikan field tidak menghapus nilainya.
    pub fn is_visible(&self, field: &Field) -> bool {
        if field.key == fields::MAJOR || field.key == fields::EXPERIENCE_DETAIL {
            self.reveal.is_revealed(field.key)
        } else {
            true
        }
    }

    /// Validasi seluruh nilai form terhadap skema; true bila bersih.
    pub fn validate(&mut self, schema: &ValidationSchema) -> bool {
        self.errors = schema.validate(&self.values);
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &BTreeMap<&'static str, String> {
        &self.errors
    }

    /// Error yang benar-benar ditampilkan: pesan select yang belum dipilih
    /// ditahan setelah select-nya pernah disentuh.
    pub fn display_errors(&self) -> BTreeMap<&'static str, String> {
        self.errors
            .iter()
            .filter(|(field, _)| {
                let key: &str = field;
                let gated = key == fields::EDUCATION || key == fields::CODING_EXPERIENCE;
                !gated || !self.reveal.is_touched(key)
            })
            .map(|(field, message)| (*field, message.clone()))
            .collect()
    }

    /// Ambil guard pengiriman; gagal bila masih ada submit yang jalan.
    pub fn begin_submit(&mut self) -> Result<(), SubmitInFlight> {
        if self.in_flight {
            return Err(SubmitInFlight);
        }
        self.in_flight = true;
        Ok(())
    }

    pub fn finish_submit(&mut self) {
        self.in_flight = false;
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }

    /// Kembalikan form ke keadaan kosong: nilai, error, reveal, touched.
    pub fn reset(&mut self) {
        self.values.clear();
        self.errors.clear();
        self.reveal.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn major_field() -> Field {
        fields::bootcamp_fields()
            .into_iter()
            .find(|f| f.key == fields::MAJOR)
            .unwrap()
    }

    fn detail_field() -> Field {
        fields::bootcamp_fields()
            .into_iter()
            .find(|f| f.key == fields::EXPERIENCE_DETAIL)
            .unwrap()
    }

    #[test]
    fn degree_selection_reveals_major() {
        let mut controller = FormController::new();
        assert!(!controller.is_visible(&major_field()));

        controller.education_changed("S1");
        assert!(controller.is_visible(&major_field()));

        controller.education_changed("S2");
        assert!(controller.is_visible(&major_field()));

        controller.education_changed("SMA");
        assert!(!controller.is_visible(&major_field()));
    }

    #[test]
    fn experience_selection_reveals_detail() {
        let mut controller = FormController::new();
        controller.coding_experience_changed("Ada");
        assert!(controller.is_visible(&detail_field()));

        controller.coding_experience_changed("Tidak Ada");
        assert!(!controller.is_visible(&detail_field()));
    }

    #[test]
    fn hidden_field_keeps_its_value() {
        let mut controller = FormController::new();
        controller.education_changed("S1");
        controller.set_value(fields::MAJOR, "Informatika");

        controller.education_changed("SMA");
        assert!(!controller.is_visible(&major_field()));
        assert_eq!(controller.value(fields::MAJOR), "Informatika");

        controller.education_changed("S1");
        assert_eq!(controller.value(fields::MAJOR), "Informatika");
    }

    #[test]
    fn untouched_select_error_is_displayed() {
        let mut controller = FormController::new();
        let schema = ValidationSchema::bootcamp();
        assert!(!controller.validate(&schema));

        let shown = controller.display_errors();
        assert_eq!(shown[fields::EDUCATION], "Pendidikan harus diisi.");
        assert_eq!(shown[fields::CODING_EXPERIENCE], "Pengalaman koding harus diisi.");
    }

    #[test]
    fn touched_select_error_is_suppressed() {
        let mut controller = FormController::new();
        let schema = ValidationSchema::bootcamp();
        controller.education_changed("SMA");
        controller.set_value(fields::EDUCATION, "");

        assert!(!controller.validate(&schema));
        assert!(controller.errors().contains_key(fields::EDUCATION));
        assert!(!controller.display_errors().contains_key(fields::EDUCATION));
        // field non-select tetap tampil
        assert!(controller.display_errors().contains_key(fields::FULL_NAME));
    }

    #[test]
    fn begin_submit_refuses_while_in_flight() {
        let mut controller = FormController::new();
        assert!(controller.begin_submit().is_ok());
        assert!(controller.is_submitting());
        assert_eq!(controller.begin_submit(), Err(SubmitInFlight));

        controller.finish_submit();
        assert!(controller.begin_submit().is_ok());
    }

    #[test]
    fn reset_clears_values_errors_and_reveals() {
        let mut controller = FormController::new();
        let schema = ValidationSchema::bootcamp();
        controller.set_value(fields::FULL_NAME, "Budi");
        controller.education_changed("S1");
        controller.validate(&schema);

        controller.reset();
        assert_eq!(controller.value(fields::FULL_NAME), "");
        assert!(controller.errors().is_empty());
        assert!(!controller.reveal().is_revealed(fields::MAJOR));
        assert!(!controller.reveal().is_touched(fields::EDUCATION));
    }
}
