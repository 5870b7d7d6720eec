use gloo::storage::{LocalStorage, Storage};
use shared::Profile;

use super::auth::check_email;

/// Local storage key for the owner profile
pub const PROFILE_KEY: &str = "profile";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Email,
    Phone,
    Address,
    About,
    ImageUrl,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileForm {
    pub profile: Profile,
    pub image_url: String,
}

impl ProfileForm {
    pub fn new(profile: Profile, image_url: Option<String>) -> Self {
        Self { profile, image_url: image_url.unwrap_or_default() }
    }

    pub fn set(&mut self, field: ProfileField, value: String) {
        match field {
            ProfileField::Name => self.profile.name = value,
            ProfileField::Email => self.profile.email = value,
            ProfileField::Phone => self.profile.phone = value,
            ProfileField::Address => self.profile.address = value,
            ProfileField::About => self.profile.about = value,
            ProfileField::ImageUrl => self.image_url = value,
        }
    }

    /// Trimmed profile plus the image URL to hand to the session
    pub fn validate(&self) -> Result<(Profile, Option<String>), String> {
        let profile = Profile {
            name: self.profile.name.trim().to_string(),
            email: self.profile.email.trim().to_string(),
            phone: self.profile.phone.trim().to_string(),
            address: self.profile.address.trim().to_string(),
            about: self.profile.about.trim().to_string(),
        };
        if profile.name.is_empty() {
            return Err("Name is required".to_string());
        }
        if !profile.email.is_empty() {
            check_email(&profile.email)?;
        }
        if !profile.phone.is_empty()
            && !profile.phone.chars().all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' '))
        {
            return Err("Phone number may only contain digits".to_string());
        }

        let image_url = self.image_url.trim();
        let image_url = if image_url.is_empty() {
            None
        } else if image_url.starts_with("http://") || image_url.starts_with("https://") {
            Some(image_url.to_string())
        } else {
            return Err("Image URL must start with http:// or https://".to_string());
        };

        Ok((profile, image_url))
    }
}

pub fn load_profile() -> Profile {
    LocalStorage::get(PROFILE_KEY).unwrap_or_default()
}

pub fn save_profile(profile: &Profile) {
    if let Err(err) = LocalStorage::set(PROFILE_KEY, profile) {
        log::error!("could not save profile: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ProfileForm {
        let mut form = ProfileForm::default();
        form.set(ProfileField::Name, "  Toko Roti  ".into());
        form.set(ProfileField::Phone, "+62 812-0000".into());
        form
    }

    #[test]
    fn test_name_required() {
        assert_eq!(ProfileForm::default().validate().unwrap_err(), "Name is required");
    }

    #[test]
    fn test_trims_and_accepts_optional_fields() {
        let (profile, image) = filled().validate().unwrap();
        assert_eq!(profile.name, "Toko Roti");
        assert_eq!(profile.phone, "+62 812-0000");
        assert!(image.is_none());
    }

    #[test]
    fn test_rejects_bad_email_and_url() {
        let mut form = filled();
        form.set(ProfileField::Email, "nope".into());
        assert_eq!(form.validate().unwrap_err(), "Please enter a valid email address");

        form.set(ProfileField::Email, "owner@toko.id".into());
        form.set(ProfileField::ImageUrl, "ftp://img".into());
        assert!(form.validate().is_err());

        form.set(ProfileField::ImageUrl, " https://img.example/me.png ".into());
        let (_, image) = form.validate().unwrap();
        assert_eq!(image.as_deref(), Some("https://img.example/me.png"));
    }

    #[test]
    fn test_new_prefills_image() {
        let form = ProfileForm::new(Profile::default(), Some("https://a.b/c.png".into()));
        assert_eq!(form.image_url, "https://a.b/c.png");
    }
}
