//! Storefront response types.

use serde::Deserialize;

use crate::domain::{Availability, AvailabilityResult, CatalogItem};

/// Listing page response.
#[derive(Debug, Default, Deserialize)]
pub struct ListingResponse {
    #[serde(default)]
    pub products: Vec<ProductDto>,
    #[serde(default)]
    pub pagination: Option<PaginationDto>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationDto {
    pub total_results: Option<u64>,
    pub total_pages: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub code: Option<String>,
    pub name: Option<String>,
    pub price: Option<PriceDto>,
    pub brick_name_text: Option<String>,
    pub vertical_name_text: Option<String>,
    pub segment_name_text: Option<String>,
    pub url: Option<String>,
    #[serde(default)]
    pub images: Vec<ImageDto>,
    pub fnl_color_variant_data: Option<ColorVariantDto>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceDto {
    #[serde(rename = "displayformattedValue")]
    pub display_formatted_value: Option<String>,
    pub formatted_value: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageDto {
    pub image_type: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorVariantDto {
    #[serde(rename = "outfitPictureURL")]
    pub outfit_picture_url: Option<String>,
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

impl ProductDto {
    /// Primary image: first `PRIMARY` image, then the colour-variant outfit
    /// picture, then the first image with any URL.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        let primary = self.images.iter().find(|image| {
            image
                .image_type
                .as_deref()
                .is_some_and(|t| t.eq_ignore_ascii_case("PRIMARY"))
                && non_empty(image.url.as_ref()).is_some()
        });
        if let Some(image) = primary {
            return non_empty(image.url.as_ref());
        }

        if let Some(url) = self
            .fnl_color_variant_data
            .as_ref()
            .and_then(|variant| non_empty(variant.outfit_picture_url.as_ref()))
        {
            return Some(url);
        }

        self.images
            .iter()
            .find_map(|image| non_empty(image.url.as_ref()))
    }

    /// Convert into a catalog item, resolving relative URLs against `base_url`.
    #[must_use]
    pub fn into_item(self, base_url: &str) -> CatalogItem {
        let image_url = self.primary_image().map(str::to_string);
        let price = self.price.as_ref().and_then(|p| {
            non_empty(p.display_formatted_value.as_ref())
                .or_else(|| non_empty(p.formatted_value.as_ref()))
                .map(str::to_string)
        });
        let category = non_empty(self.brick_name_text.as_ref())
            .or_else(|| non_empty(self.vertical_name_text.as_ref()))
            .or_else(|| non_empty(self.segment_name_text.as_ref()))
            .map(str::to_string);
        let url = non_empty(self.url.as_ref()).map(|path| absolute_url(base_url, path));

        CatalogItem {
            id: self.code.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            price,
            category,
            image_url,
            url,
        }
    }
}

fn absolute_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http") || base_url.is_empty() {
        path.to_string()
    } else {
        format!("{}{}", base_url.trim_end_matches('/'), path)
    }
}

/// Availability check response.
///
/// The flags are read from the first entry of `productDetails` when present,
/// otherwise from the top level.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceabilityResponse {
    #[serde(default)]
    pub product_details: Option<Vec<ServiceabilityDetail>>,
    pub servicability: Option<bool>,
    pub cod_eligible: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceabilityDetail {
    pub servicability: Option<bool>,
    pub cod_eligible: Option<bool>,
}

impl From<ServiceabilityResponse> for AvailabilityResult {
    fn from(response: ServiceabilityResponse) -> Self {
        let detail = response
            .product_details
            .and_then(|details| details.into_iter().next());
        let (deliverable, cod) = match detail {
            Some(detail) => (detail.servicability, detail.cod_eligible),
            None => (response.servicability, response.cod_eligible),
        };
        AvailabilityResult::new(Availability::from_flag(deliverable), cod)
    }
}
