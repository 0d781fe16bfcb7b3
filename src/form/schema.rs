// src/form/schema.rs - skema validasi deklaratif, dievaluasi saat submit

use std::collections::BTreeMap;

use regex::Regex;

use super::FormValues;
use super::fields::{
    ADDRESS, CODING_EXPERIENCE, DATE_OF_BIRTH, EDUCATION, EMAIL, FULL_NAME, NUMBER_PHONE,
    REASONS_TO_JOIN,
};

fn looks_like_email(email: &str) -> bool {
    let re = Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").unwrap();
    re.is_match(email)
}

/// Satu aturan untuk satu field; pesan error dalam Bahasa Indonesia.
enum Rule {
    Required { message: &'static str },
    Email { message: &'static str },
}

/// Kumpulan aturan required/format per field. Field yang tidak terdaftar
/// tidak divalidasi sama sekali; tidak ada validasi lintas field.
pub struct ValidationSchema {
    rules: Vec<(&'static str, Vec<Rule>)>,
}

impl ValidationSchema {
    pub fn bootcamp() -> Self {
        let rules = vec![
            (FULL_NAME, vec![Rule::Required { message: "Nama lengkap harus diisi." }]),
            (
                EMAIL,
                vec![
                    Rule::Required { message: "Email harus diisi." },
                    Rule::Email { message: "Email tidak valid." },
                ],
            ),
            (NUMBER_PHONE, vec![Rule::Required { message: "Nomor handphone harus diisi." }]),
            (DATE_OF_BIRTH, vec![Rule::Required { message: "Tanggal lahir harus diisi." }]),
            (EDUCATION, vec![Rule::Required { message: "Pendidikan harus diisi." }]),
            // (MAJOR, vec![Rule::Required { message: "Jurusan harus diisi." }]),
            (ADDRESS, vec![Rule::Required { message: "Alamat harus diisi." }]),
            (CODING_EXPERIENCE, vec![Rule::Required { message: "Pengalaman koding harus diisi." }]),
            // (EXPERIENCE_DETAIL, vec![Rule::Required { message: "Detail pengalaman harus diisi." }]),
            (REASONS_TO_JOIN, vec![Rule::Required { message: "Alasan ikut bootcamp harus diisi." }]),
        ];
        ValidationSchema { rules }
    }

    /// Jalankan seluruh aturan terhadap nilai form. Hasilnya pesan error per
    /// field yang gagal (pesan pertama per field); map kosong berarti form
    /// boleh dikirim.
    pub fn validate(&self, values: &FormValues) -> BTreeMap<&'static str, String> {
        let mut errors = BTreeMap::new();
        for (field, rules) in &self.rules {
            let value = values.get(*field).map(String::as_str).unwrap_or("").trim();
            for rule in rules {
                let failed = match rule {
                    Rule::Required { message } => value.is_empty().then_some(*message),
                    Rule::Email { message } => {
                        (!value.is_empty() && !looks_like_email(value)).then_some(*message)
                    }
                };
                if let Some(message) = failed {
                    errors.insert(*field, message.to_string());
                    break;
                }
            }
        }
        errors
    }
}
