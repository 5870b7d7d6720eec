use serde::Serialize;
use shared::ProductPayload;

/// A file the user picked, waiting to be attached to a multipart body
#[derive(Debug, Clone, PartialEq)]
pub struct Upload {
    file_name: String,
    source: Source,
}

#[derive(Debug, Clone, PartialEq)]
enum Source {
    Browser(web_sys::File),
    /// Name only, for exercising the gateway outside the browser
    #[cfg(test)]
    Detached,
}

impl Upload {
    pub fn from_file(file: web_sys::File) -> Self {
        Self {
            file_name: file.name(),
            source: Source::Browser(file),
        }
    }

    #[cfg(test)]
    pub fn detached(file_name: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
            source: Source::Detached,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn browser_file(&self) -> Option<&web_sys::File> {
        match &self.source {
            Source::Browser(file) => Some(file),
            #[cfg(test)]
            Source::Detached => None,
        }
    }
}

/// `multipart/form-data` body: text fields plus attached files
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Multipart {
    pub fields: Vec<(String, String)>,
    pub files: Vec<(String, Upload)>,
}

impl Multipart {
    pub fn from_fields(fields: Vec<(String, String)>) -> Self {
        Self { fields, files: Vec::new() }
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.fields.push((name.to_string(), value.to_string()));
        self
    }

    pub fn file(mut self, name: &str, upload: Upload) -> Self {
        self.files.push((name.to_string(), upload));
        self
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// What the product modals send: the JSON request plus an optional new photo.
///
/// Without a photo it serialises exactly like [`ProductPayload`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductSubmission {
    #[serde(flatten)]
    pub payload: ProductPayload,
    #[serde(skip)]
    pub image: Option<Upload>,
}

impl ProductSubmission {
    pub fn without_image(payload: ProductPayload) -> Self {
        Self { payload, image: None }
    }

    /// Multipart body when there is a photo to send
    pub fn multipart(&self) -> Option<Multipart> {
        self.image
            .as_ref()
            .map(|image| Multipart::from_fields(self.payload.form_fields()).file("image", image.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{EntityId, ProductMaterialPayload, WeightUnit};

    fn payload() -> ProductPayload {
        ProductPayload {
            product_name: "Bread".into(),
            price: 15000.0,
            stock: 3,
            description: Some("Sourdough".into()),
            materials: vec![ProductMaterialPayload {
                material_id: EntityId::from(1),
                amount_per_product: 0.5,
                weight_unit: WeightUnit::Kg,
            }],
        }
    }

    #[test]
    fn test_submission_without_image_is_plain_json() {
        let submission = ProductSubmission::without_image(payload());
        assert!(submission.multipart().is_none());
        assert_eq!(
            serde_json::to_value(&submission).unwrap(),
            serde_json::to_value(payload()).unwrap()
        );
    }

    #[test]
    fn test_submission_with_image_builds_multipart() {
        let submission = ProductSubmission {
            payload: payload(),
            image: Some(Upload::detached("bread.jpg")),
        };
        let form = submission.multipart().unwrap();
        assert_eq!(form.field("product_name"), Some("Bread"));
        assert_eq!(form.field("description"), Some("Sourdough"));
        assert_eq!(form.field("materials[0][weight_unit]"), Some("kg"));
        assert_eq!(form.files.len(), 1);
        assert_eq!(form.files[0].0, "image");
        assert_eq!(form.files[0].1.file_name(), "bread.jpg");
        assert!(form.files[0].1.browser_file().is_none());
    }
}
