use crate::catalog::{FormField, FormState, PropertyForm};
use std::fmt;

fn field_value(form: &PropertyForm, field: FormField) -> String {
    match field {
        FormField::Id => format!("{} (locked)", form.id),
        FormField::Title => form.title.clone(),
        FormField::Type => form.property_type.to_string(),
        FormField::Location => form.location.clone(),
        FormField::Price => form.price.clone(),
        FormField::Status => form.status.to_string(),
        FormField::Bedrooms => form.bedrooms.clone(),
        FormField::Bathrooms => form.bathrooms.clone(),
        FormField::Area => form.area.clone(),
        FormField::Description => form.description.clone(),
        FormField::Features => form.features.clone(),
        FormField::AvailableFrom => form.available_from.clone(),
        FormField::Rental => match form.is_rental {
            true => "yes".to_string(),
            false => "no".to_string(),
        },
    }
}

/// The open add or edit form, one line per field
pub struct FormView<'a>(pub &'a FormState);

impl fmt::Display for FormView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0;
        writeln!(f, "── {} ──", state.heading())?;
        for field in FormField::ALL {
            writeln!(
                f,
                "  {:<28} {:<14} {}",
                field.label(),
                format!("({})", field.key()),
                field_value(&state.fields, field)
            )?;
        }
        writeln!(f, "\n`set <field> <value>` to edit, `save` to submit, `cancel` to discard")
    }
}

pub fn render_form(state: &FormState) -> String {
    FormView(state).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_form_shows_generated_id() {
        let out = render_form(&FormState::adding(6));
        assert!(out.starts_with("── Add New Property ──"));
        assert!(out.contains("PROP007 (locked)"));
        assert!(out.contains("apartment"));
    }
}
