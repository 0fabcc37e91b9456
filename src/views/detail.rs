use crate::models::Property;
use crate::views::format::format_price;
use std::fmt;

/// Full view of a selected record
pub struct Detail<'a>(pub &'a Property);

impl fmt::Display for Detail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let property = self.0;
        writeln!(f, "══ {} ══", property.title)?;
        writeln!(f, "{}  ·  {}  ·  {}\n", property.id, property.property_type, property.status)?;

        writeln!(f, "Location:       {}", property.location)?;
        writeln!(f, "Price:          {}", format_price(property.price, property.is_rental))?;
        if property.bedrooms > 0 {
            writeln!(f, "Bedrooms:       {} BHK", property.bedrooms)?;
        }
        writeln!(f, "Bathrooms:      {}", property.bathrooms)?;
        writeln!(f, "Area:           {} sqft", property.area)?;
        writeln!(f, "Available From: {}\n", property.available_from)?;

        writeln!(f, "Description")?;
        writeln!(f, "  {}\n", property.description)?;

        writeln!(f, "Features & Amenities")?;
        let features = property.feature_list();
        if features.is_empty() {
            return writeln!(f, "  -");
        }
        let tags: Vec<String> = features.iter().map(|feature| format!("[{feature}]")).collect();
        writeln!(f, "  {}", tags.join(" "))
    }
}

pub fn render_detail(property: &Property) -> String {
    Detail(property).to_string()
}
