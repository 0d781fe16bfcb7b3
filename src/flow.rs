// src/flow.rs - satu siklus isi-validasi-kirim untuk form pendaftaran

use anyhow::Result;
use log::{error, info, warn};

use crate::form::controller::FormController;
use crate::form::fields::{self, Field};
use crate::form::schema::ValidationSchema;
use crate::models::registration::Registration;
use crate::services::submit_services::SubmissionService;
use crate::ui::{Dialog, FormAction, FormBackend};

pub const FORM_TITLE: &str = "Pedaftaran Mini Bootcamp Fullstack JavaScript - Batch 1";

/// Hasil satu siklus isi-submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOutcome {
    /// Pendaftaran terkirim; form sudah direset.
    Submitted,
    /// Validasi gagal; error sudah ditampilkan, nilai dipertahankan.
    ValidationFailed,
    /// Pengiriman gagal; dialog error sudah tampil, nilai dipertahankan.
    SubmitFailed,
    /// Pengguna memilih tombol Reset.
    ResetRequested,
}

/// Merangkai controller, skema, service pengiriman, dan backend permukaan
/// menjadi sesi pendaftaran interaktif.
pub struct RegistrationFlow<B: FormBackend> {
    pub controller: FormController,
    schema: ValidationSchema,
    form: Vec<Field>,
    service: SubmissionService,
    backend: B,
}

impl<B: FormBackend> RegistrationFlow<B> {
    pub fn new(service: SubmissionService, backend: B) -> Self {
        Self {
            controller: FormController::new(),
            schema: ValidationSchema::bootcamp(),
            form: fields::bootcamp_fields(),
            service,
            backend,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Jalankan sesi sampai satu pendaftaran berhasil terkirim. Nilai form
    /// bertahan antar siklus yang gagal, jadi pengguna cukup membetulkan
    /// isian yang salah.
    pub async fn run(&mut self) -> Result<()> {
        self.backend.intro(FORM_TITLE)?;
        loop {
            if self.run_once().await? == FlowOutcome::Submitted {
                return Ok(());
            }
        }
    }

    /// Satu siklus: prompt semua field yang tampil (urut form), lalu aksi
    /// submit/reset.
    pub async fn run_once(&mut self) -> Result<FlowOutcome> {
        for i in 0..self.form.len() {
            let field = &self.form[i];
            if !self.controller.is_visible(field) {
                continue;
            }

            let initial = self.controller.value(field.key).to_string();
            let value = self.backend.input(field, &initial)?;

            // change handler select menjalankan reveal sebelum field
            // turunannya sempat di-prompt
            if field.key == fields::EDUCATION && !value.is_empty() {
                self.controller.education_changed(&value);
            } else if field.key == fields::CODING_EXPERIENCE && !value.is_empty() {
                self.controller.coding_experience_changed(&value);
            } else {
                self.controller.set_value(field.key, value);
            }
        }

        match self.backend.action()? {
            FormAction::Reset => {
                self.controller.reset();
                Ok(FlowOutcome::ResetRequested)
            }
            FormAction::Submit => self.submit().await,
        }
    }

    async fn submit(&mut self) -> Result<FlowOutcome> {
        if !self.controller.validate(&self.schema) {
            self.backend.show_errors(&self.form, &self.controller.display_errors())?;
            return Ok(FlowOutcome::ValidationFailed);
        }

        let registration = match Registration::from_values(self.controller.values()) {
            Ok(registration) => registration,
            Err(err) => {
                // lolos skema tapi record tidak bisa dibentuk (mis. tanggal rusak)
                error!("record pendaftaran tidak valid: {err}");
                self.backend.dialog(&Dialog::error(
                    "Error!",
                    "Sepertinya ada kesalahan teknis",
                    "Coba Lagi",
                ))?;
                return Ok(FlowOutcome::SubmitFailed);
            }
        };

        if self.controller.begin_submit().is_err() {
            warn!("submit diabaikan, masih ada pengiriman berjalan");
            return Ok(FlowOutcome::SubmitFailed);
        }
        let result = self.service.submit(&registration).await;
        self.controller.finish_submit();

        match result {
            Ok(()) => {
                info!("pendaftaran terkirim");
                self.backend
                    .dialog(&Dialog::success("Sukses!", "Pendaftaran sukses brohh"))?;
                self.controller.reset();
                Ok(FlowOutcome::Submitted)
            }
            Err(err) => {
                error!("pengiriman pendaftaran gagal: {err}");
                self.backend.dialog(&Dialog::error(
                    "Error!",
                    "Sepertinya ada kesalahan teknis",
                    "Coba Lagi",
                ))?;
                Ok(FlowOutcome::SubmitFailed)
            }
        }
    }
}
