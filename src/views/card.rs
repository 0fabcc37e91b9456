use crate::models::{Property, TypeFilter};
use crate::views::format::{format_price, truncate};
use std::fmt;

const DESCRIPTION_PREVIEW: usize = 120;

/// Counts line shown on cards: bedrooms only appear when there are any
fn counts_line(property: &Property) -> String {
    let mut parts = Vec::with_capacity(3);
    if property.bedrooms > 0 {
        parts.push(format!("{} BHK", property.bedrooms));
    }
    parts.push(format!("{} Bath", property.bathrooms));
    parts.push(format!("{} sqft", property.area));
    parts.join(" · ")
}

/// One listing card
pub struct Card<'a>(pub &'a Property);

impl fmt::Display for Card<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let property = self.0;
        writeln!(f, "┌ {}  [{}]", property.title, property.status)?;
        writeln!(f, "│ {}", property.id)?;
        writeln!(f, "│ 📍 {}", property.location)?;
        writeln!(f, "│ {}", format_price(property.price, property.is_rental))?;
        writeln!(f, "│ {}", counts_line(property))?;
        if !property.description.is_empty() {
            writeln!(f, "│ {}", truncate(&property.description, DESCRIPTION_PREVIEW))?;
        }
        f.write_str("└")
    }
}

pub fn render_card(property: &Property) -> String {
    Card(property).to_string()
}

/// The listing: a filter summary followed by every visible card
pub fn render_list(
    visible: &[&Property],
    total: usize,
    type_filter: TypeFilter,
    query: &str,
    loading: bool,
) -> String {
    let search = if query.is_empty() {
        String::new()
    } else {
        format!(", search: \"{query}\"")
    };
    let status = if loading { " ⏳ loading…" } else { "" };
    let header = format!(
        "Showing {} of {} properties (type: {}{}){}\n\n",
        visible.len(),
        total,
        type_filter,
        search,
        status
    );

    if visible.is_empty() {
        return header + "🏠 No properties found\n   Try adjusting your search or filters\n";
    }

    visible
        .iter()
        .fold(header, |out, property| out + &render_card(property) + "\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PropertyStatus, PropertyType};

    fn office() -> Property {
        Property {
            id: "PROP010".to_string(),
            title: "Corner Office".to_string(),
            property_type: PropertyType::Commercial,
            location: "Cyber City, Gurugram".to_string(),
            price: Some(25_000),
            status: PropertyStatus::Available,
            bedrooms: 0,
            bathrooms: 1,
            area: 600,
            description: "Furnished".to_string(),
            features: String::new(),
            available_from: String::new(),
            is_rental: true,
        }
    }

    #[test]
    fn card_hides_zero_bedrooms() {
        let card = render_card(&office());
        assert!(card.contains("Corner Office  [available]"));
        assert!(card.contains("₹25,000/month"));
        assert!(card.contains("1 Bath · 600 sqft"));
        assert!(!card.contains("BHK"));
    }

    #[test]
    fn card_shows_bedrooms_when_present() {
        let mut flat = office();
        flat.bedrooms = 2;
        assert!(render_card(&flat).contains("2 BHK · 1 Bath · 600 sqft"));
    }

    #[test]
    fn list_renders_each_card_and_loading_marker() {
        let first = office();
        let mut second = office();
        second.id = "PROP011".to_string();

        let out = render_list(&[&first, &second], 2, TypeFilter::All, "", true);
        assert!(out.starts_with("Showing 2 of 2 properties (type: all) ⏳ loading…\n\n┌ Corner Office"));
        assert!(out.contains("│ PROP010\n"));
        assert!(out.contains("│ PROP011\n"));
        assert_eq!(out.matches('└').count(), 2);
    }

    #[test]
    fn empty_list_shows_hint() {
        let out = render_list(&[], 4, TypeFilter::All, "nowhere", false);
        assert!(out.starts_with("Showing 0 of 4 properties (type: all, search: \"nowhere\")"));
        assert!(out.contains("No properties found"));
    }
}
