use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::Product;
use crate::mvi::ScreenState;

use super::field::Field;

/// Whether the form creates a new product or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormMode {
    Create,
    /// Price is fixed after creation, so the field is not part of the form.
    Edit,
}

impl FormMode {
    /// Fields present in a form of this mode.
    pub fn fields(self) -> &'static [Field] {
        match self {
            FormMode::Create => &Field::ALL,
            FormMode::Edit => &[Field::Title, Field::ImageUrl, Field::Description],
        }
    }

    pub fn has_field(self, field: Field) -> bool {
        self.fields().contains(&field)
    }
}

/// Current text of every field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldValues {
    pub title: String,
    pub image_url: String,
    pub description: String,
    pub price: String,
}

impl FieldValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::ImageUrl => &self.image_url,
            Field::Description => &self.description,
            Field::Price => &self.price,
        }
    }

    pub(crate) fn set(&mut self, field: Field, text: String) {
        let slot = match field {
            Field::Title => &mut self.title,
            Field::ImageUrl => &mut self.image_url,
            Field::Description => &mut self.description,
            Field::Price => &mut self.price,
        };
        *slot = text;
    }
}

/// Validity flag for each field present in the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldValidity {
    flags: BTreeMap<Field, bool>,
}

impl FieldValidity {
    fn uniform(mode: FormMode, valid: bool) -> Self {
        Self {
            flags: mode.fields().iter().map(|&field| (field, valid)).collect(),
        }
    }

    /// `None` when the field is not part of the form.
    pub fn get(&self, field: Field) -> Option<bool> {
        self.flags.get(&field).copied()
    }

    pub fn all_valid(&self) -> bool {
        self.flags.values().all(|&valid| valid)
    }

    pub fn invalid_fields(&self) -> Vec<Field> {
        self.flags
            .iter()
            .filter(|(_, valid)| !**valid)
            .map(|(&field, _)| field)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, bool)> + '_ {
        self.flags.iter().map(|(&field, &valid)| (field, valid))
    }

    pub(crate) fn set(&mut self, field: Field, valid: bool) {
        if let Some(flag) = self.flags.get_mut(&field) {
            *flag = valid;
        }
    }
}

/// Snapshot of the edit form.
///
/// `is_form_valid` is true iff every validity flag is true. States are only
/// produced by the constructors below and by `FormReducer`, both of which
/// keep that invariant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormState {
    mode: FormMode,
    values: FieldValues,
    validity: FieldValidity,
    is_form_valid: bool,
}

impl ScreenState for FormState {}

impl FormState {
    /// Empty form for a new product. Nothing is valid yet.
    pub fn for_create() -> Self {
        Self {
            mode: FormMode::Create,
            values: FieldValues::default(),
            validity: FieldValidity::uniform(FormMode::Create, false),
            is_form_valid: false,
        }
    }

    /// Form seeded from an existing product, whose values are presumed valid.
    pub fn for_edit(product: &Product) -> Self {
        Self {
            mode: FormMode::Edit,
            values: FieldValues {
                title: product.title.clone(),
                image_url: product.image_url.clone(),
                description: product.description.clone(),
                price: String::new(),
            },
            validity: FieldValidity::uniform(FormMode::Edit, true),
            is_form_valid: true,
        }
    }

    /// Edit form when `product` is present, create form otherwise.
    pub fn new(product: Option<&Product>) -> Self {
        match product {
            Some(product) => Self::for_edit(product),
            None => Self::for_create(),
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn validity(&self) -> &FieldValidity {
        &self.validity
    }

    pub fn is_form_valid(&self) -> bool {
        self.is_form_valid
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    /// Replace one field's value and validity and recompute the aggregate.
    pub(crate) fn with_field(&self, field: Field, text: String, is_valid: bool) -> Self {
        let mut next = self.clone();
        next.values.set(field, text);
        next.validity.set(field, is_valid);
        next.is_form_valid = next.validity.all_valid();
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductId;

    fn product() -> Product {
        Product {
            id: ProductId(42),
            title: "Old".to_string(),
            image_url: "u".to_string(),
            description: "d".to_string(),
            price: 5.0,
        }
    }

    #[test]
    fn create_form_starts_empty_and_invalid() {
        let state = FormState::for_create();
        assert_eq!(state.mode(), FormMode::Create);
        assert!(!state.is_form_valid());
        for field in Field::ALL {
            assert_eq!(state.value(field), "");
            assert_eq!(state.validity().get(field), Some(false));
        }
    }

    #[test]
    fn edit_form_copies_product_and_hides_price() {
        let state = FormState::for_edit(&product());
        assert_eq!(state.mode(), FormMode::Edit);
        assert!(state.is_form_valid());
        assert_eq!(state.value(Field::Title), "Old");
        assert_eq!(state.value(Field::ImageUrl), "u");
        assert_eq!(state.value(Field::Description), "d");
        assert_eq!(state.value(Field::Price), "");
        assert_eq!(state.validity().get(Field::Price), None);
        assert!(state.validity().invalid_fields().is_empty());
    }

    #[test]
    fn edit_form_snapshot_omits_price_validity() {
        let json = serde_json::to_value(FormState::for_edit(&product())).unwrap();
        assert_eq!(json["mode"], "edit");
        assert_eq!(json["values"]["description"], "d");
        assert_eq!(
            json["validity"],
            serde_json::json!({ "title": true, "image_url": true, "description": true })
        );
        assert_eq!(json["is_form_valid"], true);
    }

    #[test]
    fn new_picks_mode_from_product_presence() {
        assert_eq!(FormState::new(None).mode(), FormMode::Create);
        assert_eq!(FormState::new(Some(&product())).mode(), FormMode::Edit);
    }
}
