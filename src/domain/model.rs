
/// The raw parsed input tree. No schema is enforced; every key may be absent.
pub type Record = serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientInfo {
    pub name: String,
    pub date: String,
    pub garment: String,
    pub height: String,
    pub weight: String,
    pub notes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeasurementRow {
    pub area: String,
    pub measurement: String,
    pub notes: String,
}

impl MeasurementRow {
    pub const COLUMNS: [&'static str; 3] = ["Area", "Measurement", "Notes"];
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleChoices {
    pub shirt: Vec<String>,
    pub trouser: Vec<String>,
}

/// One client, read once from the input and discarded after rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientRecord {
    pub info: ClientInfo,
    pub shirt_measurements: Vec<MeasurementRow>,
    pub trouser_measurements: Vec<MeasurementRow>,
    pub style_choices: StyleChoices,
    pub instructions: Vec<String>,
}

/// A finished document and the file name it should be stored under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReport {
    pub slug: String,
    pub file_name: String,
    pub html: String,
}
