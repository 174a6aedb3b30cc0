//! Multipart Payload
//!
//! Ordered text fields plus the optional image, converted to a
//! `reqwest::multipart::Form` only at the HTTP boundary so the field list
//! stays inspectable.

use reqwest::multipart::{Form, Part};

use crate::error::{ApiError, ApiResult};
use crate::models::UploadedImage;

pub const IMAGE_FIELD: &str = "image";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointPayload {
    fields: Vec<(&'static str, String)>,
    image: Option<UploadedImage>,
}

impl PointPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: &'static str, value: String) {
        self.fields.push((name, value));
    }

    pub fn set_image(&mut self, image: UploadedImage) {
        self.image = Some(image);
    }

    /// Text value of a field, if present
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn image(&self) -> Option<&UploadedImage> {
        self.image.as_ref()
    }

    /// Names of every part in posting order, `image` last when present
    pub fn field_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.fields.iter().map(|(name, _)| *name).collect();
        if self.image.is_some() {
            names.push(IMAGE_FIELD);
        }
        names
    }

    pub fn into_multipart(self) -> ApiResult<Form> {
        let mut form = Form::new();
        for (name, value) in self.fields {
            form = form.text(name, value);
        }
        if let Some(image) = self.image {
            let part = Part::bytes(image.bytes)
                .file_name(image.file_name)
                .mime_str(&image.content_type)
                .map_err(|e| ApiError::Payload(e.to_string()))?;
            form = form.part(IMAGE_FIELD, part);
        }
        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::PointForm;
    use crate::models::Position;

    fn filled_form() -> PointForm {
        let mut form = PointForm::new();
        form.set_field("name", "Recicla Centro".to_string());
        form.set_field("email", "contato@recicla.org".to_string());
        form.set_field("whatsapp", "5511999990000".to_string());
        form.select_uf("SP".to_string());
        form.select_city("Campinas".to_string());
        form.click_map(Position::new(-22.9056, -47.0608));
        form.toggle_item(5);
        form.toggle_item(1);
        form
    }

    fn png() -> UploadedImage {
        UploadedImage {
            file_name: "fachada.png".to_string(),
            content_type: "image/png".to_string(),
            bytes: vec![0x89, b'P', b'N', b'G'],
        }
    }

    #[test]
    fn test_payload_has_exact_fields() {
        let payload = filled_form().payload();
        assert_eq!(
            payload.field_names(),
            vec!["name", "email", "whatsapp", "uf", "city", "latitude", "longitude", "itens"]
        );
        assert_eq!(payload.get("name"), Some("Recicla Centro"));
        assert_eq!(payload.get("uf"), Some("SP"));
        assert_eq!(payload.get("city"), Some("Campinas"));
        assert_eq!(payload.get("latitude"), Some("-22.9056"));
        assert_eq!(payload.get("longitude"), Some("-47.0608"));
        assert_eq!(payload.get("itens"), Some("5,1"));
    }

    #[test]
    fn test_payload_omits_image_when_none_chosen() {
        let payload = filled_form().payload();
        assert!(payload.image().is_none());
        assert!(!payload.field_names().contains(&IMAGE_FIELD));
        assert_eq!(payload.get(IMAGE_FIELD), None);
    }

    #[test]
    fn test_payload_includes_chosen_image() {
        let mut form = filled_form();
        form.set_image(png());
        let payload = form.payload();
        assert_eq!(payload.field_names().last(), Some(&IMAGE_FIELD));
        assert_eq!(payload.image().map(|i| i.file_name.as_str()), Some("fachada.png"));
    }

    #[test]
    fn test_untouched_form_payload() {
        let payload = PointForm::new().payload();
        assert_eq!(payload.get("uf"), Some("0"));
        assert_eq!(payload.get("city"), Some("0"));
        assert_eq!(payload.get("latitude"), Some("0"));
        assert_eq!(payload.get("itens"), Some(""));
    }

    #[test]
    fn test_into_multipart_rejects_bad_mime() {
        let mut payload = filled_form().payload();
        payload.set_image(UploadedImage { content_type: "not a mime".to_string(), ..png() });
        assert!(matches!(payload.into_multipart(), Err(ApiError::Payload(_))));
    }

    #[test]
    fn test_into_multipart_with_image() {
        let mut form = filled_form();
        form.set_image(png());
        assert!(form.payload().into_multipart().is_ok());
    }
}
