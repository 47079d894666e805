/// 只給下限時的推估倍率
pub const LOWER_ONLY_FACTOR: f64 = 1.2;
/// 只給上限時的推估倍率
pub const UPPER_ONLY_FACTOR: f64 = 0.8;

/// 由薪資區間推估單一薪資。
///
/// 幣別必須與 `target_currency` 完全相同 (區分大小寫)，不做匯率換算。
/// 小於等於 0 的上下限視同未提供。兩端都有取平均，只有上限乘 0.8，
/// 只有下限乘 1.2，否則回傳 `None`。
pub fn estimate(
    currency: Option<&str>,
    lower: Option<f64>,
    upper: Option<f64>,
    target_currency: &str,
) -> Option<f64> {
    if currency != Some(target_currency) {
        return None;
    }

    let lower = lower.filter(|value| *value > 0.0);
    let upper = upper.filter(|value| *value > 0.0);

    match (lower, upper) {
        (Some(lower), Some(upper)) => Some((lower + upper) / 2.0),
        (None, Some(upper)) => Some(upper * UPPER_ONLY_FACTOR),
        (Some(lower), None) => Some(lower * LOWER_ONLY_FACTOR),
        (None, None) => None,
    }
}
