// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Response rendering

use serde_json::Value;

use crate::error::Result;
use crate::highlight::Highlighter;

/// Language tag passed to the highlighter
pub const RESPONSE_LANG: &str = "json";

/// Largest magnitude below which every integer is exact in an f64
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Pretty-print `value` with 2-space indentation and highlight it
pub async fn render(value: &Value, highlighter: &dyn Highlighter, theme: &str) -> Result<String> {
    let mut value = value.clone();
    integral_floats_as_integers(&mut value);
    let pretty = serde_json::to_string_pretty(&value)?;
    highlighter.highlight(&pretty, RESPONSE_LANG, theme).await
}

/// `1.0` prints as `1`, matching how browsers print parsed JSON numbers
fn integral_floats_as_integers(value: &mut Value) {
    match value {
        Value::Number(n) => {
            let integral = n
                .as_f64()
                .filter(|f| n.is_f64() && f.fract() == 0.0 && f.abs() < MAX_SAFE_INTEGER);
            if let Some(f) = integral {
                *n = (f as i64).into();
            }
        }
        Value::Array(items) => items.iter_mut().for_each(integral_floats_as_integers),
        Value::Object(map) => map.values_mut().for_each(integral_floats_as_integers),
        _ => {}
    }
}
