//! Reservation form and validated request

use thiserror::Error;

/// A reservation form exactly as the guest submitted it
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReservationForm {
    /// The guest's name
    pub name: Option<String>,

    /// The guest's email address
    pub email: Option<String>,

    /// The guest's phone number
    pub phone: Option<String>,

    /// The preferred date, free text
    pub date_preference: Option<String>,

    /// The size of the party
    pub number_of_guests: Option<String>,

    /// Any special requests
    pub special_requests: Option<String>,
}

/// Errors raised while validating a [`ReservationForm`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more required fields are absent or empty
    #[error("missing required fields: {}", .0.join(", "))]
    MissingRequiredFields(Vec<&'static str>),
}

/// A reservation request whose required fields are all present
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReservationRequest {
    name: String,
    email: String,
    phone: String,
    date_preference: Option<String>,
    number_of_guests: String,
    special_requests: Option<String>,
}

impl ReservationRequest {
    /// The guest's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The guest's email address, used verbatim as the confirmation recipient
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The guest's phone number
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// The preferred date, if the guest gave one
    pub fn date_preference(&self) -> Option<&str> {
        self.date_preference.as_deref()
    }

    /// The size of the party
    pub fn number_of_guests(&self) -> &str {
        &self.number_of_guests
    }

    /// Special requests, if the guest gave any
    pub fn special_requests(&self) -> Option<&str> {
        self.special_requests.as_deref()
    }
}

impl TryFrom<ReservationForm> for ReservationRequest {
    type Error = ValidationError;

    fn try_from(form: ReservationForm) -> Result<Self, Self::Error> {
        let name = present(form.name);
        let email = present(form.email);
        let phone = present(form.phone);
        let number_of_guests = present(form.number_of_guests);

        match (name, email, phone, number_of_guests) {
            (Some(name), Some(email), Some(phone), Some(number_of_guests)) => Ok(Self {
                name,
                email,
                phone,
                date_preference: present(form.date_preference),
                number_of_guests,
                special_requests: present(form.special_requests),
            }),
            (name, email, phone, number_of_guests) => {
                let missing = [
                    ("name", name.is_none()),
                    ("email", email.is_none()),
                    ("phone", phone.is_none()),
                    ("numberOfGuests", number_of_guests.is_none()),
                ]
                .into_iter()
                .filter_map(|(field, is_missing)| is_missing.then_some(field))
                .collect();

                Err(ValidationError::MissingRequiredFields(missing))
            }
        }
    }
}

/// Blank values count as absent.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}
