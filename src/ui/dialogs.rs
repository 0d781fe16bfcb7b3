/// Ikon dialog; menentukan warna bingkai di terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogIcon {
    Success,
    Error,
}

/// Dialog modal sederhana: judul, isi, satu tombol konfirmasi.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub title: String,
    pub text: String,
    pub icon: DialogIcon,
    pub confirm_label: String,
}

impl Dialog {
    pub fn success(title: impl Into<String>, text: impl Into<String>) -> Self {
        Dialog {
            title: title.into(),
            text: text.into(),
            icon: DialogIcon::Success,
            confirm_label: "OK".to_string(),
        }
    }

    pub fn error(
        title: impl Into<String>,
        text: impl Into<String>,
        confirm_label: impl Into<String>,
    ) -> Self {
        Dialog {
            title: title.into(),
            text: text.into(),
            icon: DialogIcon::Error,
            confirm_label: confirm_label.into(),
        }
    }
}
