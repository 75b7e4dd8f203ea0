//! EBA/İÇYS digital content points.

use rust_decimal::Decimal;

use crate::config::DigitalContentRates;
use crate::models::BonusCategory;

use super::bonus::{BonusResult, cap_count};

/// Warning code raised when a content count exceeds the yearly cap.
pub const DIGITAL_CONTENT_CAPPED: &str = "DIGITAL_CONTENT_CAPPED";

/// Warning code raised when content produced under a ministry assignment is zeroed.
pub const DIGITAL_CONTENT_MINISTRY_ASSIGNMENT: &str = "DIGITAL_CONTENT_MINISTRY_ASSIGNMENT";

/// Calculates digital content points.
///
/// Scenario and content counts are each limited to `yearly_cap` per calendar
/// year, then multiplied by their rates. Content produced under a ministry
/// assignment earns nothing.
///
/// # Example
///
/// ```
/// use hizmet_puani::calculation::calculate_digital_content;
/// use hizmet_puani::config::DigitalContentRates;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rates = DigitalContentRates {
///     scenario: Decimal::from_str("0.2").unwrap(),
///     content: Decimal::from_str("0.3").unwrap(),
///     yearly_cap: 10,
/// };
/// let result = calculate_digital_content(12, 4, false, &rates);
/// assert_eq!(result.line.amount, Decimal::from_str("3.2").unwrap()); // 10×0.2 + 4×0.3
/// assert!(result.line.cap_applied);
/// ```
pub fn calculate_digital_content(
    scenarios: u32,
    contents: u32,
    ministry_assignment: bool,
    rates: &DigitalContentRates,
) -> BonusResult {
    let (scenarios_counted, scenarios_capped) = cap_count(scenarios, rates.yearly_cap);
    let (contents_counted, contents_capped) = cap_count(contents, rates.yearly_cap);
    let cap_applied = scenarios_capped || contents_capped;

    let earned = Decimal::from(scenarios_counted) * rates.scenario
        + Decimal::from(contents_counted) * rates.content;

    let (amount, reasoning) = if ministry_assignment {
        (
            Decimal::ZERO,
            "Produced under a ministry assignment: no points".to_string(),
        )
    } else {
        (
            earned,
            format!(
                "{} scenarios × {} + {} contents × {} = {}",
                scenarios_counted,
                rates.scenario.normalize(),
                contents_counted,
                rates.content.normalize(),
                earned.normalize()
            ),
        )
    };

    let mut result =
        BonusResult::new(BonusCategory::DigitalContent, amount, cap_applied, reasoning);

    if cap_applied {
        result = result.with_warning(
            DIGITAL_CONTENT_CAPPED,
            format!(
                "Digital content: at most {} of each kind count per calendar year",
                rates.yearly_cap
            ),
        );
    }
    if ministry_assignment && (scenarios_counted > 0 || contents_counted > 0) {
        result = result.with_warning(
            DIGITAL_CONTENT_MINISTRY_ASSIGNMENT,
            "Digital content: content produced under a ministry assignment earns no points",
        );
    }

    result
}
