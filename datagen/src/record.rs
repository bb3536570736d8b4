use serde::{Deserialize, Serialize};

/// Label and quantity of every record in the generated batch, in output order.
const SAMPLE_DATA: [(&str, i64); 2] = [("Sample Data 1", 100), ("Sample Data 2", 200)];

/// One unit of generated data.
/// Field order here is the key order in the serialized JSON object.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: u32,
    pub name: String,
    pub value: i64,
}

impl Record {
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>, value: i64) -> Self {
        Record {
            id,
            name: name.into(),
            value,
        }
    }
}

/// Builds the fixed batch. Ids are assigned by position, starting at 1.
#[must_use]
pub fn build_records() -> Vec<Record> {
    (1..)
        .zip(SAMPLE_DATA)
        .map(|(id, (name, value))| Record::new(id, name, value))
        .collect()
}
