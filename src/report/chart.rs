use serde_json::{Map, Value, json};
use thiserror::Error;

use crate::layout::long::{LongTable, MOUSE_COLUMN, PERCENT_COLUMN};
use crate::model::table::LABEL_COLUMN;

const VEGA_LITE_SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";
const FACET_WIDTH: u32 = 180;
const FACET_HEIGHT: u32 = 260;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartOptions {
    pub facet_columns: usize,
    pub color_field: String,
    pub x_field: String,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            facet_columns: 4,
            color_field: "Genotype".to_string(),
            x_field: "Gender".to_string(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChartError {
    #[error("chart field {0:?} is not a specimen metadata column")]
    MissingField(String),
}

/// Faceted box plot (one facet per category) over a long percent table,
/// as a Vega-Lite document with the data inlined.
pub fn render_box_chart(
    table: &LongTable,
    title: &str,
    options: &ChartOptions,
) -> Result<Value, ChartError> {
    for field in [&options.color_field, &options.x_field] {
        if table.metadata_index(field).is_none() {
            return Err(ChartError::MissingField(field.clone()));
        }
    }

    let values: Vec<Value> = table
        .rows
        .iter()
        .map(|row| {
            let mut record = Map::new();
            record.insert(LABEL_COLUMN.to_string(), json!(row.category));
            record.insert(PERCENT_COLUMN.to_string(), json!(row.percent));
            record.insert(MOUSE_COLUMN.to_string(), json!(row.mouse));
            for (name, value) in table.metadata_columns.iter().zip(&row.metadata) {
                record.insert(name.clone(), json!(value));
            }
            Value::Object(record)
        })
        .collect();

    let x = json!({ "field": options.x_field, "type": "nominal", "title": null });
    let y = json!({
        "field": PERCENT_COLUMN,
        "type": "quantitative",
        "scale": { "zero": true },
        "axis": { "format": ".0%", "title": null }
    });
    let color = json!({ "field": options.color_field, "type": "nominal" });
    let offset = json!({ "field": options.color_field });

    Ok(json!({
        "$schema": VEGA_LITE_SCHEMA,
        "title": title,
        "data": { "values": values },
        "columns": options.facet_columns.max(1),
        "facet": {
            "field": LABEL_COLUMN,
            "type": "nominal",
            "sort": table.categories(),
            "header": { "title": null }
        },
        "resolve": { "scale": { "y": "independent" } },
        "spec": {
            "width": FACET_WIDTH,
            "height": FACET_HEIGHT,
            "layer": [
                {
                    "mark": { "type": "boxplot", "extent": "min-max", "opacity": 0.35 },
                    "encoding": { "x": x, "xOffset": offset, "y": y, "color": color }
                },
                {
                    "mark": { "type": "point", "filled": true },
                    "encoding": {
                        "x": x,
                        "xOffset": offset,
                        "y": y,
                        "color": color,
                        "tooltip": [
                            { "field": MOUSE_COLUMN },
                            { "field": PERCENT_COLUMN, "format": ".2%" }
                        ]
                    }
                }
            ]
        }
    }))
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/chart.rs"]
mod tests;
