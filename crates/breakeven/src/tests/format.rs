use crate::util::format::{
    format_inr, format_number, format_percentage, format_with_unit, group_indian,
};

#[test]
fn test_indian_grouping() {
    assert_eq!(group_indian("0"), "0");
    assert_eq!(group_indian("999"), "999");
    assert_eq!(group_indian("1000"), "1,000");
    assert_eq!(group_indian("12345"), "12,345");
    assert_eq!(group_indian("123456"), "1,23,456");
    assert_eq!(group_indian("1234567"), "12,34,567");
    assert_eq!(group_indian("2000000000"), "2,00,00,00,000");
}

#[test]
fn test_format_inr() {
    assert_eq!(format_inr(2_000_000_000.0), "₹2,00,00,00,000");
    assert_eq!(format_inr(106_050_000.0), "₹10,60,50,000");
    assert_eq!(format_inr(-2_500.4), "-₹2,500");
    assert_eq!(format_inr(999.5), "₹1,000");
    assert_eq!(format_inr(998.5), "₹999");
    assert_eq!(format_inr(-0.4), "₹0");
    assert_eq!(format_inr(0.0), "₹0");
}

#[test]
fn test_format_number() {
    assert_eq!(format_number(126_500.0), "1,26,500");
    assert_eq!(format_number(47_394.59), "47,394.59");
    assert_eq!(format_number(2.5), "2.5");
    assert_eq!(format_number(2.004), "2");
    assert_eq!(format_number(-10_000.0), "-10,000");
    assert_eq!(format_number(f64::NAN), "NaN");
    assert_eq!(format_number(f64::NEG_INFINITY), "-∞");
}

#[test]
fn test_format_with_unit() {
    assert_eq!(format_with_unit(1_500.0, "INR"), "₹1,500");
    assert_eq!(format_with_unit(126_500.0, "tons CO2"), "1,26,500 tons CO2");
    assert_eq!(format_with_unit(3.25, ""), "3.25");
    assert_eq!(format_percentage(94.78968), "94.79%");
}
