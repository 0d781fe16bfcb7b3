// src/form/fields.rs - deklarasi field form pendaftaran

/// Kunci field, sama persis dengan nama properti pada payload JSON.
pub const FULL_NAME: &str = "fullName";
pub const EMAIL: &str = "email";
pub const NUMBER_PHONE: &str = "numberPhone";
pub const DATE_OF_BIRTH: &str = "dateOfBirth";
pub const EDUCATION: &str = "education";
pub const MAJOR: &str = "major";
pub const ADDRESS: &str = "address";
pub const CODING_EXPERIENCE: &str = "codingExperience";
pub const EXPERIENCE_DETAIL: &str = "experienceDetail";
pub const REASONS_TO_JOIN: &str = "reasonsToJoinBootcamp";

pub const EDUCATION_OPTIONS: &[&str] = &["SMP", "SMA", "S1", "S2"];
pub const EXPERIENCE_OPTIONS: &[&str] = &["Ada", "Tidak Ada"];

/// Jenis input sebuah field.
///
/// Text / Number / Date tampil sebagai editor satu baris; Number hanya
/// menerima digit dan Date hanya menerima tanggal ISO (YYYY-MM-DD),
/// keduanya boleh kosong. TextArea untuk isian bebas yang lebih panjang.
#[derive(Debug, Clone)]
pub enum FieldKind {
    Text,
    Number,
    Date,
    Select {
        placeholder: &'static str,
        options: &'static [&'static str],
    },
    TextArea,
}

/// Deskripsi deklaratif satu field form.
#[derive(Debug, Clone)]
pub struct Field {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl Field {
    pub const fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { key, label, kind }
    }
}

/// Field form pendaftaran, urut sesuai tampilan. Jurusan dan detail
/// pengalaman hanya dirender bila reveal state-nya aktif.
pub fn bootcamp_fields() -> Vec<Field> {
    vec![
        Field::new(FULL_NAME, "Nama Lengkap", FieldKind::Text),
        Field::new(EMAIL, "Email", FieldKind::Text),
        Field::new(NUMBER_PHONE, "No. HP (WhatsApp)", FieldKind::Number),
        Field::new(DATE_OF_BIRTH, "Tanggal Lahir", FieldKind::Date),
        Field::new(
            EDUCATION,
            "Pendidikan",
            FieldKind::Select {
                placeholder: "-- Pilih Pendidikan --",
                options: EDUCATION_OPTIONS,
            },
        ),
        Field::new(MAJOR, "Jurusan", FieldKind::Text),
        Field::new(ADDRESS, "Alamat Lengkap", FieldKind::TextArea),
        Field::new(
            CODING_EXPERIENCE,
            "Pengalaman Koding",
            FieldKind::Select {
                placeholder: "-- Pilih Pengalaman --",
                options: EXPERIENCE_OPTIONS,
            },
        ),
        Field::new(EXPERIENCE_DETAIL, "Pernah Belajar Apa Saja?", FieldKind::TextArea),
        Field::new(REASONS_TO_JOIN, "Alasan Ikut Bootcamp", FieldKind::TextArea),
    ]
}
