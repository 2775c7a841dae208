use crate::catalog::{NewProduct, ProductId, ProductUpdate};
use crate::form::{parse_price, Field, FormState};

use super::error::SubmitError;

/// Repository call derived from a valid form.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitRequest {
    Create(NewProduct),
    Update { id: ProductId, update: ProductUpdate },
}

/// Decide which repository call `state` maps to.
///
/// Pure: checks aggregate validity, then builds an update when `identity`
/// names an existing product and a create otherwise. Price is converted
/// only for creates and is never sent with an update.
pub fn plan(state: &FormState, identity: Option<ProductId>) -> Result<SubmitRequest, SubmitError> {
    if !state.is_form_valid() {
        return Err(SubmitError::ValidationFailed {
            invalid_fields: state.validity().invalid_fields(),
        });
    }

    let values = state.values();
    match identity {
        Some(id) => Ok(SubmitRequest::Update {
            id,
            update: ProductUpdate {
                title: values.title.clone(),
                description: values.description.clone(),
                image_url: values.image_url.clone(),
            },
        }),
        None => {
            let price = parse_price(&values.price).ok_or_else(|| SubmitError::ValidationFailed {
                invalid_fields: vec![Field::Price],
            })?;
            Ok(SubmitRequest::Create(NewProduct {
                title: values.title.clone(),
                description: values.description.clone(),
                image_url: values.image_url.clone(),
                price,
            }))
        }
    }
}
