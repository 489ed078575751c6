//! The restaurant printed on guest confirmations

/// The restaurant identity used in guest-facing emails
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Venue {
    /// The chef's or restaurant's name
    pub name: String,

    /// A short title shown under the name
    pub title: String,

    /// Postal address
    pub address: String,

    /// Contact phone number
    pub phone: String,

    /// Opening or booking note, e.g. "By appointment only"
    pub availability: String,
}

impl Default for Venue {
    fn default() -> Self {
        Self {
            name: "Tashi Phuri".to_string(),
            title: "Master Sushi Chef".to_string(),
            address: "14 Avenue Gambetta, 75020 Paris, France".to_string(),
            phone: "+33 7 83 57 72 38".to_string(),
            availability: "By appointment only".to_string(),
        }
    }
}
