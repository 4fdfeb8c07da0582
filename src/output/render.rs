//! 詳細資訊的遞迴渲染：巢狀物件以縮排區段呈現，陣列元素以空行分隔

use crate::output::styles::Styles;
use owo_colors::OwoColorize as _;
use serde_json::Value;
use std::io::{self, Write};

pub fn write_value<W: Write>(out: &mut W, styles: &Styles, value: &Value) -> io::Result<()> {
    write_nested(out, styles, value, 0)
}

fn write_nested<W: Write>(
    out: &mut W,
    styles: &Styles,
    value: &Value,
    depth: usize,
) -> io::Result<()> {
    let indent = "  ".repeat(depth);

    match value {
        Value::Object(fields) => {
            for (key, field) in fields {
                if field.is_object() || field.is_array() {
                    // 巢狀結構前空一行，標題後整段縮排
                    writeln!(out)?;
                    writeln!(out, "{}{}:", indent, key.style(styles.section))?;
                    write_nested(out, styles, field, depth + 1)?;
                } else {
                    writeln!(out, "{}{}: {}", indent, key.style(styles.key), scalar_text(field))?;
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                write_nested(out, styles, item, depth)?;
                writeln!(out)?;
            }
        }
        scalar => {
            writeln!(out, "{}{}", indent, scalar_text(scalar))?;
        }
    }

    Ok(())
}

/// 字串不帶引號，其餘純量用 JSON 字面值
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
