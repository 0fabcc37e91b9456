use num_format::{CustomFormat, Grouping, ToFormattedString};

const CRORE: f64 = 10_000_000.0;

/// Display price in rupees.
///
/// Rentals are a monthly amount grouped the Indian way (`₹1,50,000/month`);
/// sale prices are expressed in crore with two decimals (`₹1.50 Cr`). A
/// missing price reads as zero.
pub fn format_price(price: Option<i64>, is_rental: bool) -> String {
    let amount = price.unwrap_or(0);
    if is_rental {
        format!("₹{}/month", group_indian(amount))
    } else {
        format!("₹{:.2} Cr", amount as f64 / CRORE)
    }
}

fn group_indian(amount: i64) -> String {
    match CustomFormat::builder()
        .grouping(Grouping::Indian)
        .separator(",")
        .minus_sign("-")
        .build()
    {
        Ok(format) => amount.to_formatted_string(&format),
        Err(_) => amount.to_string(),
    }
}

/// Shorten to at most `max` characters, marking the cut with an ellipsis
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut short: String = text.chars().take(max.saturating_sub(1)).collect();
    short.push('…');
    short
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sale_prices_in_crore() {
        assert_eq!(format_price(Some(15_000_000), false), "₹1.50 Cr");
        assert_eq!(format_price(Some(85_000_000), false), "₹8.50 Cr");
        assert_eq!(format_price(Some(4_500_000), false), "₹0.45 Cr");
    }

    #[test]
    fn rentals_use_indian_grouping() {
        assert_eq!(format_price(Some(25_000), true), "₹25,000/month");
        assert_eq!(format_price(Some(150_000), true), "₹1,50,000/month");
        assert_eq!(format_price(Some(900), true), "₹900/month");
    }

    #[test]
    fn missing_price_reads_as_zero() {
        assert_eq!(format_price(None, false), "₹0.00 Cr");
        assert_eq!(format_price(None, true), "₹0/month");
    }

    #[test]
    fn truncate_counts_chars() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Spacious 3BHK flat", 9), "Spacious…");
    }
}
