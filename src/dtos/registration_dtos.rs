use serde::Serialize;

use crate::models::registration::Registration;

/// Proyeksi pendaftaran ke bentuk kawat: JSON datar ber-camelCase.
/// `major` dan `experienceDetail` hanya ikut bila varian modelnya membawa
/// nilai tersebut.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationOut {
    pub full_name: String,
    pub email: String,
    pub number_phone: String,
    /// ISO "YYYY-MM-DD"
    pub date_of_birth: String,
    pub education: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,
    pub address: String,
    pub coding_experience: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_detail: Option<String>,
    pub reasons_to_join_bootcamp: String,
}

impl From<&Registration> for RegistrationOut {
    fn from(registration: &Registration) -> Self {
        RegistrationOut {
            full_name: registration.full_name.clone(),
            email: registration.email.clone(),
            number_phone: registration.number_phone.clone(),
            date_of_birth: registration.date_of_birth.format("%Y-%m-%d").to_string(),
            education: registration.education.label().to_string(),
            major: registration.education.major().map(str::to_string),
            address: registration.address.clone(),
            coding_experience: registration.coding_experience.label().to_string(),
            experience_detail: registration.coding_experience.detail().map(str::to_string),
            reasons_to_join_bootcamp: registration.reasons_to_join_bootcamp.clone(),
        }
    }
}

/// Badan request: payload dibungkus properti `data`.
#[derive(Serialize, Debug)]
pub struct SubmitBody {
    pub data: RegistrationOut,
}
