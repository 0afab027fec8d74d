//! Display formatting for rates, amounts and liquidity

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::Price;

/// Rendered in place of any value whose inputs have not resolved
pub const PLACEHOLDER: &str = "-";

/// Round half away from zero to exactly two decimal digits
pub fn fixed2(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}

/// Insert thousands separators into the integer part of a plain decimal string
pub fn commify(number: &str) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{}{}.{}", sign, grouped, fraction),
        None => format!("{}{}", sign, grouped),
    }
}

/// APY/APR cell: `3.14%`, or the placeholder when the rate is unknown
pub fn format_rate(rate: Option<Decimal>) -> String {
    match rate {
        Some(rate) => format!("{}%", fixed2(rate)),
        None => PLACEHOLDER.to_string(),
    }
}

/// Amount cell: `150.00 DAI`
pub fn format_amount(amount: Decimal, symbol: &str) -> String {
    format!("{} {}", fixed2(amount), symbol)
}

/// Liquidity in millions of USD: `$2.50M`
pub fn format_liquidity(liquidity: Option<Decimal>, price: Option<&Price>) -> String {
    let millions = liquidity
        .zip(price)
        .and_then(|(liquidity, price)| liquidity.checked_mul(price.usd))
        .and_then(|usd| usd.checked_div(Decimal::from(1_000_000)));

    match millions {
        Some(millions) => format!("${}M", commify(&fixed2(millions))),
        None => PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn rate_has_two_digits_and_percent() {
        assert_eq!(format_rate(Some(dec!(3.14159))), "3.14%");
        assert_eq!(format_rate(Some(dec!(7))), "7.00%");
        assert_eq!(format_rate(Some(dec!(0.005))), "0.01%");
        assert_eq!(format_rate(None), "-");
    }

    #[test]
    fn zero_values_render_as_numbers() {
        // Only an unknown value is a placeholder; a known zero is shown
        assert_eq!(format_rate(Some(dec!(0))), "0.00%");
        assert_eq!(format_liquidity(Some(dec!(0)), Some(&Price::usd(dec!(1)))), "$0.00M");
    }

    #[test]
    fn amount_is_rounded_and_suffixed() {
        assert_eq!(format_amount(dec!(150.004), "DAI"), "150.00 DAI");
        assert_eq!(format_amount(dec!(0.5), "ETH"), "0.50 ETH");
        assert_eq!(format_amount(dec!(1234.567), "USDC"), "1234.57 USDC");
    }

    #[test]
    fn liquidity_in_millions() {
        let one_dollar = Price::usd(dec!(1.00));
        assert_eq!(format_liquidity(Some(dec!(2500000)), Some(&one_dollar)), "$2.50M");

        let eth = Price::usd(dec!(2000));
        assert_eq!(format_liquidity(Some(dec!(1500000)), Some(&eth)), "$3,000.00M");
    }

    #[test]
    fn liquidity_without_inputs_is_placeholder() {
        let price = Price::usd(dec!(1));
        assert_eq!(format_liquidity(None, Some(&price)), "-");
        assert_eq!(format_liquidity(Some(dec!(2500000)), None), "-");
    }

    #[test]
    fn commify_groups_thousands() {
        assert_eq!(commify("0.42"), "0.42");
        assert_eq!(commify("999"), "999");
        assert_eq!(commify("1000"), "1,000");
        assert_eq!(commify("1234567.89"), "1,234,567.89");
        assert_eq!(commify("-12345.00"), "-12,345.00");
    }
}
