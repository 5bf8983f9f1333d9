use super::ui::Message;
use crate::core::{ConversionError, ConversionRequest, RateProvider, RateTable};
use anyhow::Result;
use tracing::{debug, info};

/// Smallest accepted amount, also the step amounts are snapped to.
pub const MIN_AMOUNT: f64 = 0.01;
const STEPS_PER_UNIT: f64 = 100.0;

/// Raw user input for a conversion, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertInput {
    pub amount: f64,
    pub from: Option<String>,
    pub to: Option<String>,
}

/// Rejects amounts below the minimum and snaps the rest to the 0.01 grid.
///
/// Amounts too large to snap without overflowing are rejected as well.
pub fn validate_amount(amount: f64) -> Option<f64> {
    if amount < MIN_AMOUNT {
        return None;
    }
    let snapped = (amount * STEPS_PER_UNIT).round() / STEPS_PER_UNIT;
    snapped.is_finite().then_some(snapped)
}

fn normalize_code(code: &str) -> Option<String> {
    let code = code.trim().to_uppercase();
    (!code.is_empty()).then_some(code)
}

/// Resolves the input against the fetched rates into a request, or the
/// warning explaining which input is missing.
pub fn build_request(
    input: &ConvertInput,
    rates: &RateTable,
) -> Result<ConversionRequest, Message> {
    let amount = validate_amount(input.amount).ok_or_else(|| {
        if input.amount >= MIN_AMOUNT {
            Message::warning("Please enter a smaller amount")
        } else {
            Message::warning(format!("Please enter an amount of at least {MIN_AMOUNT}"))
        }
    })?;

    let source = input
        .from
        .as_deref()
        .and_then(normalize_code)
        .or_else(|| rates.default_currency())
        .ok_or_else(|| Message::warning("Please select a source currency"))?;

    let target = input
        .to
        .as_deref()
        .and_then(normalize_code)
        .ok_or_else(|| Message::warning("Please select a target currency"))?;

    Ok(ConversionRequest::new(amount, &source, &target))
}

/// Produces the output lines for one conversion run.
pub fn conversion_messages(input: &ConvertInput, rates: &RateTable) -> Vec<Message> {
    let request = match build_request(input, rates) {
        Ok(request) => request,
        Err(warning) => return vec![warning],
    };
    debug!(?request, "Converting");

    match request.convert(rates) {
        Ok(converted) if !converted.is_finite() => vec![Message::warning(format!(
            "Amount is too large to convert from {} to {}",
            request.source, request.target
        ))],
        Ok(converted) => {
            let mut messages = vec![Message::success(format!(
                "{:.2} {} = {:.2} {}",
                request.amount, request.source, converted, request.target
            ))];
            if let Some(date) = rates.date() {
                messages.push(Message::info(format!(
                    "Rates as of {date} (base {})",
                    rates.base()
                )));
            }
            messages
        }
        Err(ConversionError::NoRates) => vec![Message::warning(
            "Exchange rates are unavailable, cannot convert right now",
        )],
        Err(e) => vec![Message::warning(format!(
            "{e}. Conversion unavailable for {} to {}",
            request.source, request.target
        ))],
    }
}

pub async fn run(
    provider: &dyn RateProvider,
    input: &ConvertInput,
    base_currency: &str,
) -> Result<()> {
    info!("Converting currency...");
    let rates = super::load_rates(provider, base_currency).await;

    for message in conversion_messages(input, &rates) {
        println!("{message}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ui::StyleType;
    use chrono::NaiveDate;

    fn sample_rates() -> RateTable {
        RateTable::new(
            "EUR",
            NaiveDate::from_ymd_opt(2026, 10, 15),
            [("USD".to_string(), 1.1), ("INR".to_string(), 90.0)],
        )
    }

    fn input(amount: f64, from: Option<&str>, to: Option<&str>) -> ConvertInput {
        ConvertInput {
            amount,
            from: from.map(str::to_string),
            to: to.map(str::to_string),
        }
    }

    #[test]
    fn test_validate_amount() {
        assert_eq!(validate_amount(10.0), Some(10.0));
        assert_eq!(validate_amount(0.01), Some(0.01));
        assert_eq!(validate_amount(2.344), Some(2.34));
        assert_eq!(validate_amount(0.009), None);
        assert_eq!(validate_amount(0.0), None);
        assert_eq!(validate_amount(-5.0), None);
        assert_eq!(validate_amount(f64::NAN), None);
        assert_eq!(validate_amount(f64::INFINITY), None);
        assert_eq!(validate_amount(1e307), None);
        assert!(validate_amount(1e300).is_some());
    }

    #[test]
    fn test_huge_amount_warns() {
        let messages = conversion_messages(&input(1e307, Some("USD"), Some("INR")), &sample_rates());
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].kind, StyleType::Warning);
        assert_eq!(messages[0].text, "Please enter a smaller amount");
    }

    #[test]
    fn test_overflowing_conversion_warns() {
        // Fits the amount grid but overflows once multiplied by the rate
        let rates = RateTable::new("EUR", None, [("KRW".to_string(), 1500.0)]);
        let messages = conversion_messages(&input(1e306, Some("EUR"), Some("KRW")), &rates);
        assert_eq!(
            messages,
            vec![Message::warning(
                "Amount is too large to convert from EUR to KRW"
            )]
        );
    }

    #[test]
    fn test_successful_conversion_message() {
        let messages = conversion_messages(&input(10.0, Some("usd"), Some("INR")), &sample_rates());
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], Message::success("10.00 USD = 818.18 INR"));
        assert_eq!(messages[1], Message::info("Rates as of 2026-10-15 (base EUR)"));
    }

    #[test]
    fn test_source_defaults_to_usd() {
        let request = build_request(&input(5.0, None, Some("EUR")), &sample_rates()).unwrap();
        assert_eq!(request.source, "USD");
        assert_eq!(request.target, "EUR");
    }

    #[test]
    fn test_missing_target_warns() {
        let messages = conversion_messages(&input(5.0, Some("USD"), None), &sample_rates());
        assert_eq!(messages, vec![Message::warning("Please select a target currency")]);

        let messages = conversion_messages(&input(5.0, Some("USD"), Some("  ")), &sample_rates());
        assert_eq!(messages[0].kind, StyleType::Warning);
    }

    #[test]
    fn test_small_amount_warns() {
        let messages = conversion_messages(&input(0.001, Some("USD"), Some("INR")), &sample_rates());
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].kind, StyleType::Warning);
        assert!(messages[0].text.contains("at least 0.01"));
    }

    #[test]
    fn test_unsupported_currency_warns() {
        let messages = conversion_messages(&input(5.0, Some("EUR"), Some("JPY")), &sample_rates());
        assert_eq!(
            messages,
            vec![Message::warning(
                "Target currency JPY is not supported. Conversion unavailable for EUR to JPY"
            )]
        );
    }

    #[test]
    fn test_empty_rates_warns() {
        let messages =
            conversion_messages(&input(5.0, Some("USD"), Some("EUR")), &RateTable::empty("EUR"));
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].kind, StyleType::Warning);
        assert!(messages[0].text.contains("unavailable"));
    }
}
