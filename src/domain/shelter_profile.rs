//! src/domain/shelter_profile.rs
use serde::Deserialize;

/// Label reported when there is no profile at all.
pub const WHOLE_PROFILE_MISSING: &str = "All profile information";

/// Contact details a shelter must fill in before it can list pets.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ShelterProfile {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub contact_hours: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}

impl ShelterProfile {
    fn required_fields(&self) -> [(&Option<String>, &'static str); 6] {
        [
            (&self.name, "Shelter name"),
            (&self.email, "Email address"),
            (&self.phone, "Phone number"),
            (&self.contact_hours, "Contact hours"),
            (&self.city, "City"),
            (&self.state, "State"),
        ]
    }

    /// Labels of the required fields that are absent or blank, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.required_fields()
            .into_iter()
            .filter(|(value, _)| is_blank(value))
            .map(|(_, label)| label)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// Same as [`ShelterProfile::missing_fields`], for a shelter that may not
/// have a profile yet.
pub fn missing_profile_fields(profile: Option<&ShelterProfile>) -> Vec<&'static str> {
    match profile {
        Some(profile) => profile.missing_fields(),
        None => vec![WHOLE_PROFILE_MISSING],
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}
