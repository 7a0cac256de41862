use serde::{Deserialize, Serialize};

use crate::error::StockError;
use crate::stock::StockRecord;

/// Plain, serializable view of a [`StockRecord`].
///
/// Persistence and mapping layers use this shape to store a record and hand
/// it back. Nothing here is validated; [`StockRecord::restore`] does that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockSnapshot {
    pub product_id: String,
    pub location: String,
    pub on_hand: i64,
    pub reserved: i64,
    pub reorder_threshold: i64,
    pub max_capacity: i64,
}

impl From<&StockRecord> for StockSnapshot {
    fn from(record: &StockRecord) -> Self {
        record.snapshot()
    }
}

impl TryFrom<StockSnapshot> for StockRecord {
    type Error = StockError;

    fn try_from(snapshot: StockSnapshot) -> Result<Self, Self::Error> {
        StockRecord::restore(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reserved_record() -> StockRecord {
        let mut record = StockRecord::new("P-1", "WH-1-A1", 10, 5, 100).unwrap();
        record.reserve(4).unwrap();
        record
    }

    #[test]
    fn snapshot_restores_to_an_equal_record() {
        let record = reserved_record();
        let restored = StockRecord::try_from(StockSnapshot::from(&record)).unwrap();
        assert_eq!(restored, record);
        assert_eq!(restored.reserved(), 4);
    }

    #[test]
    fn snapshot_serializes_with_camel_case_fields() {
        let json = serde_json::to_value(reserved_record().snapshot()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "productId": "P-1",
                "location": "WH-1-A1",
                "onHand": 10,
                "reserved": 4,
                "reorderThreshold": 5,
                "maxCapacity": 100
            })
        );

        let back: StockSnapshot = serde_json::from_value(json).unwrap();
        assert_eq!(back, reserved_record().snapshot());
    }

    #[test]
    fn restore_rejects_reservations_outside_on_hand() {
        let mut snapshot = reserved_record().snapshot();
        snapshot.reserved = 11;
        assert!(StockRecord::restore(snapshot.clone()).unwrap_err().is_invalid_argument());

        snapshot.reserved = -1;
        assert!(StockRecord::restore(snapshot).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn restore_applies_constructor_checks() {
        let mut snapshot = reserved_record().snapshot();
        snapshot.location = "   ".to_string();
        assert_eq!(
            StockRecord::restore(snapshot).unwrap_err(),
            StockError::invalid_argument("location cannot be blank")
        );

        let mut snapshot = reserved_record().snapshot();
        snapshot.reorder_threshold = 101;
        assert!(StockRecord::restore(snapshot).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn restore_trims_location() {
        let mut snapshot = reserved_record().snapshot();
        snapshot.location = " WH-9 ".to_string();
        let record = StockRecord::restore(snapshot).unwrap();
        assert_eq!(record.location().as_str(), "WH-9");
    }
}
