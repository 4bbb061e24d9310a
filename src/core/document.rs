use crate::core::render::FragmentRenderer;
use crate::core::skeleton::{
    SECTION_CLIENT_INFORMATION, SECTION_MEASUREMENTS, SECTION_STYLE_CHOICES,
    SECTION_TAILOR_INSTRUCTIONS, SHEET_CSS, SHEET_TEMPLATE,
};
use crate::core::template::Template;
use crate::domain::model::{ClientRecord, MeasurementRow};
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Assembles the full client sheet for `record`.
pub fn assemble(
    record: &ClientRecord,
    renderer: FragmentRenderer,
    generated_at: DateTime<Utc>,
) -> Result<String> {
    let template = Template::parse(SHEET_TEMPLATE)?;
    let info = &record.info;

    let values: HashMap<&str, String> = HashMap::from([
        ("name", renderer.text(&info.name).into_owned()),
        ("date_str", renderer.text(&info.date).into_owned()),
        ("garment", renderer.text(&info.garment).into_owned()),
        ("css", SHEET_CSS.to_string()),
        ("section_info", SECTION_CLIENT_INFORMATION.to_string()),
        ("section_measurements", SECTION_MEASUREMENTS.to_string()),
        ("section_styles", SECTION_STYLE_CHOICES.to_string()),
        ("section_instructions", SECTION_TAILOR_INSTRUCTIONS.to_string()),
        ("info_html", renderer.info_grid(info)),
        (
            "shirt_table",
            renderer.table(&record.shirt_measurements, &MeasurementRow::COLUMNS),
        ),
        (
            "trouser_table",
            renderer.table(&record.trouser_measurements, &MeasurementRow::COLUMNS),
        ),
        ("style_shirt_html", renderer.list_items(&record.style_choices.shirt)),
        ("style_trouser_html", renderer.list_items(&record.style_choices.trouser)),
        ("instructions_html", renderer.list_items(&record.instructions)),
        ("generated_on", format_timestamp(generated_at)),
    ]);

    template.check_values(&values)?;
    template.substitute(&values)
}
