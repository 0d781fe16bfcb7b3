//! Backend skrip untuk menjalankan form tanpa interaksi pengguna.

use std::collections::{BTreeMap, VecDeque};

use anyhow::{Result, bail};

use crate::form::fields::Field;

use super::{Dialog, FormAction, FormBackend};

/// Menjawab prompt dari antrean jawaban dan merekam semua dialog serta
/// error yang ditampilkan. Field yang tidak punya jawaban terjadwal
/// mempertahankan nilai yang sudah ada, seperti pengguna yang menekan
/// Enter tanpa mengubah isian.
#[derive(Debug, Default)]
pub struct TestBackend {
    answers: VecDeque<(&'static str, String)>,
    actions: VecDeque<FormAction>,
    pub shown_errors: Vec<BTreeMap<&'static str, String>>,
    pub shown_dialogs: Vec<Dialog>,
}

impl TestBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Jadwalkan jawaban untuk field `key` (urut sesuai form).
    pub fn answer(mut self, key: &'static str, value: &str) -> Self {
        self.answers.push_back((key, value.to_string()));
        self
    }

    /// Jadwalkan aksi untuk akhir siklus berikutnya.
    pub fn choose(mut self, action: FormAction) -> Self {
        self.actions.push_back(action);
        self
    }
}

impl FormBackend for TestBackend {
    fn intro(&mut self, _title: &str) -> Result<()> {
        Ok(())
    }

    fn input(&mut self, field: &Field, initial: &str) -> Result<String> {
        if self.answers.front().is_some_and(|(key, _)| *key == field.key) {
            if let Some((_, value)) = self.answers.pop_front() {
                return Ok(value);
            }
        }
        Ok(initial.to_string())
    }

    fn action(&mut self) -> Result<FormAction> {
        match self.actions.pop_front() {
            Some(action) => Ok(action),
            None => bail!("skenario kehabisan aksi"),
        }
    }

    fn show_errors(
        &mut self,
        _fields: &[Field],
        errors: &BTreeMap<&'static str, String>,
    ) -> Result<()> {
        self.shown_errors.push(errors.clone());
        Ok(())
    }

    fn dialog(&mut self, dialog: &Dialog) -> Result<()> {
        self.shown_dialogs.push(dialog.clone());
        Ok(())
    }
}
