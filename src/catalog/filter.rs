use crate::models::{Property, TypeFilter};

/// Records passing both the type filter and the text query, in list order.
///
/// The query matches case-insensitively as a substring of the title, location
/// or id. An empty query matches everything.
pub fn filter_properties<'a>(
    properties: &'a [Property],
    type_filter: TypeFilter,
    query: &str,
) -> Vec<&'a Property> {
    let needle = query.to_lowercase();
    properties
        .iter()
        .filter(|p| type_filter.matches(p.property_type) && matches_query(p, &needle))
        .collect()
}

fn matches_query(property: &Property, needle: &str) -> bool {
    [&property.title, &property.location, &property.id]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PropertyStatus, PropertyType};
    use pretty_assertions::assert_eq;

    fn property(id: &str, title: &str, location: &str, property_type: PropertyType) -> Property {
        Property {
            id: id.to_string(),
            title: title.to_string(),
            property_type,
            location: location.to_string(),
            price: Some(10_000_000),
            status: PropertyStatus::Available,
            bedrooms: 2,
            bathrooms: 1,
            area: 900,
            description: String::new(),
            features: String::new(),
            available_from: String::new(),
            is_rental: false,
        }
    }

    fn catalog() -> Vec<Property> {
        vec![
            property("PROP001", "Sea Breeze Villa", "Juhu, Mumbai", PropertyType::Villa),
            property("PROP002", "Skyline Heights", "Bandra, Mumbai", PropertyType::Apartment),
            property("PROP003", "Palm Grove Villa", "Pune", PropertyType::Villa),
            property("PROP004", "Trade Tower", "BKC, MUMBAI", PropertyType::Commercial),
            property("PROP005", "Mumbai Nights", "Lonavala", PropertyType::Villa),
        ]
    }

    fn ids(properties: &[&Property]) -> Vec<String> {
        properties.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn all_with_empty_query_is_everything() {
        let properties = catalog();
        assert_eq!(filter_properties(&properties, TypeFilter::All, "").len(), 5);
    }

    #[test]
    fn type_and_text_combine_with_and() {
        let properties = catalog();
        let found = filter_properties(&properties, TypeFilter::Only(PropertyType::Villa), "Mumbai");
        assert_eq!(ids(&found), vec!["PROP001", "PROP005"]);
    }

    #[test]
    fn text_match_is_case_insensitive() {
        let properties = catalog();
        let found = filter_properties(&properties, TypeFilter::All, "mumbai");
        assert_eq!(ids(&found), vec!["PROP001", "PROP002", "PROP004", "PROP005"]);
    }

    #[test]
    fn query_matches_id() {
        let properties = catalog();
        let found = filter_properties(&properties, TypeFilter::All, "prop003");
        assert_eq!(ids(&found), vec!["PROP003"]);
    }

    #[test]
    fn filtered_list_is_exact_subset() {
        let properties = catalog();
        for filter in [
            TypeFilter::All,
            TypeFilter::Only(PropertyType::Apartment),
            TypeFilter::Only(PropertyType::Villa),
            TypeFilter::Only(PropertyType::Commercial),
        ] {
            for query in ["", "villa", "MUM", "prop", "nothing-matches"] {
                let found = filter_properties(&properties, filter, query);
                let expected: Vec<&Property> = properties
                    .iter()
                    .filter(|p| filter.matches(p.property_type))
                    .filter(|p| {
                        let q = query.to_lowercase();
                        p.title.to_lowercase().contains(&q)
                            || p.location.to_lowercase().contains(&q)
                            || p.id.to_lowercase().contains(&q)
                    })
                    .collect();
                assert_eq!(found, expected, "filter={filter} query={query}");
            }
        }
    }
}
