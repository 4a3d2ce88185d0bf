use crate::utils::error::{PredictError, Result};

/// 解析單次模型回覆。空白、非數字、非有限值與負數都視為錯誤。
pub fn parse_cac(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        tracing::error!("Model returned an empty response");
        return Err(PredictError::EmptyResponseError);
    }

    let invalid = |reason: &str| {
        tracing::error!("Invalid CAC format: {}, error: {}", trimmed, reason);
        PredictError::InvalidCacError {
            value: trimmed.to_string(),
            reason: reason.to_string(),
        }
    };

    let value: f64 = trimmed
        .parse()
        .map_err(|e: std::num::ParseFloatError| invalid(&e.to_string()))?;

    if !value.is_finite() {
        return Err(invalid("CAC must be a finite number"));
    }
    if value < 0.0 {
        return Err(invalid("CAC cannot be negative"));
    }

    Ok(value)
}

pub fn average(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(PredictError::NoSamplesError);
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

pub fn format_cac(value: f64) -> String {
    format!("{:.2}", value)
}
