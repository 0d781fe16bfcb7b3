pub mod console_backend;
pub mod dialogs;
pub mod test_backend;

pub use console_backend::ConsoleBackend;
pub use dialogs::{Dialog, DialogIcon};
pub use test_backend::TestBackend;

use std::collections::BTreeMap;

use anyhow::Result;

use crate::form::fields::Field;

/// Aksi di bagian bawah form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    /// Tombol "Daftar Sekarang".
    Submit,
    /// Tombol "Reset".
    Reset,
}

/// Permukaan form. Logika form tidak menyentuh terminal secara langsung
/// lewat trait ini, sehingga alur pendaftaran bisa dijalankan tanpa TTY
/// (lihat [`TestBackend`]).
pub trait FormBackend {
    /// Banner + judul form, sekali di awal sesi.
    fn intro(&mut self, title: &str) -> Result<()>;

    /// Prompt satu field; `initial` adalah nilai yang sudah tersimpan di
    /// form. Input kosong dibiarkan lolos: requiredness diperiksa skema
    /// saat submit.
    fn input(&mut self, field: &Field, initial: &str) -> Result<String>;

    /// Pilihan "Daftar Sekarang" / "Reset".
    fn action(&mut self) -> Result<FormAction>;

    /// Tampilkan pesan error per field di bawah form.
    fn show_errors(
        &mut self,
        fields: &[Field],
        errors: &BTreeMap<&'static str, String>,
    ) -> Result<()>;

    /// Dialog modal; kembali setelah pengguna menutupnya.
    fn dialog(&mut self, dialog: &Dialog) -> Result<()>;
}
