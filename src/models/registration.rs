// src/models/registration.rs - record pendaftaran bertipe

use chrono::NaiveDate;
use thiserror::Error;

use crate::form::FormValues;
use crate::form::fields;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("pendidikan tidak dikenal: {0}")]
    UnknownEducation(String),
    #[error("pengalaman koding tidak dikenal: {0}")]
    UnknownExperience(String),
    #[error("tanggal lahir tidak valid: {0}")]
    InvalidDate(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegreeLevel {
    S1,
    S2,
}

impl DegreeLevel {
    pub fn label(self) -> &'static str {
        match self {
            DegreeLevel::S1 => "S1",
            DegreeLevel::S2 => "S2",
        }
    }
}

/// Pendidikan terakhir. Jurusan hanya ada pada jenjang sarjana, jadi
/// kombinasi seperti "SMA dengan jurusan" tidak bisa terbentuk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Education {
    Smp,
    Sma,
    Degree { level: DegreeLevel, major: String },
}

impl Education {
    /// Bentuk dari nilai select; `major` hanya dipakai untuk S1/S2.
    pub fn parse(value: &str, major: &str) -> Result<Education, RegistrationError> {
        match value {
            "SMP" => Ok(Education::Smp),
            "SMA" => Ok(Education::Sma),
            "S1" => Ok(Education::Degree { level: DegreeLevel::S1, major: major.to_string() }),
            "S2" => Ok(Education::Degree { level: DegreeLevel::S2, major: major.to_string() }),
            other => Err(RegistrationError::UnknownEducation(other.to_string())),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Education::Smp => "SMP",
            Education::Sma => "SMA",
            Education::Degree { level, .. } => level.label(),
        }
    }

    pub fn major(&self) -> Option<&str> {
        match self {
            Education::Degree { major, .. } => Some(major.as_str()),
            _ => None,
        }
    }
}

/// Pengalaman koding; detail hanya ada bila pengalamannya "Ada".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodingExperience {
    TidakAda,
    Ada { detail: String },
}

impl CodingExperience {
    pub fn parse(value: &str, detail: &str) -> Result<CodingExperience, RegistrationError> {
        match value {
            "Ada" => Ok(CodingExperience::Ada { detail: detail.to_string() }),
            "Tidak Ada" => Ok(CodingExperience::TidakAda),
            other => Err(RegistrationError::UnknownExperience(other.to_string())),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CodingExperience::Ada { .. } => "Ada",
            CodingExperience::TidakAda => "Tidak Ada",
        }
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            CodingExperience::Ada { detail } => Some(detail.as_str()),
            CodingExperience::TidakAda => None,
        }
    }
}

/// Satu pendaftaran. Dibangun sekali tiap percobaan submit dari nilai form
/// dan dibuang setelah request selesai; tidak ada identitas atau persistensi.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub full_name: String,
    pub email: String,
    pub number_phone: String,
    pub date_of_birth: NaiveDate,
    pub education: Education,
    pub address: String,
    pub coding_experience: CodingExperience,
    pub reasons_to_join_bootcamp: String,
}

impl Registration {
    /// Bangun record dari nilai form yang sudah lolos skema validasi.
    /// Nilai field tersembunyi (jurusan tanpa jenjang sarjana, detail tanpa
    /// pengalaman) tidak pernah masuk ke record.
    pub fn from_values(values: &FormValues) -> Result<Registration, RegistrationError> {
        let get = |key: &str| {
            values.get(key).map(String::as_str).unwrap_or("").trim().to_string()
        };

        let raw_date = get(fields::DATE_OF_BIRTH);
        let date_of_birth = NaiveDate::parse_from_str(&raw_date, "%Y-%m-%d")
            .map_err(|_| RegistrationError::InvalidDate(raw_date.clone()))?;

        Ok(Registration {
            full_name: get(fields::FULL_NAME),
            email: get(fields::EMAIL),
            number_phone: get(fields::NUMBER_PHONE),
            date_of_birth,
            education: Education::parse(&get(fields::EDUCATION), &get(fields::MAJOR))?,
            address: get(fields::ADDRESS),
            coding_experience: CodingExperience::parse(
                &get(fields::CODING_EXPERIENCE),
                &get(fields::EXPERIENCE_DETAIL),
            )?,
            reasons_to_join_bootcamp: get(fields::REASONS_TO_JOIN),
        })
    }
}
