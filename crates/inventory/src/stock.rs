use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, ValueObject};

use crate::error::{StockError, StockResult};
use crate::snapshot::StockSnapshot;

/// Product identifier. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn parse(raw: &str) -> StockResult<Self> {
        if raw.is_empty() {
            return Err(StockError::invalid_argument("product id cannot be empty"));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Warehouse location code (e.g. `WH-1-A1`). Stored trimmed, never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location(String);

impl Location {
    pub fn parse(raw: &str) -> StockResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(StockError::invalid_argument("location cannot be blank"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Location {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl ValueObject for Location {}

/// Stock of one product at one warehouse location.
///
/// Invariants, held after every call whether it succeeds or fails:
/// - `0 <= reserved <= on_hand <= max_capacity`
/// - `0 <= reorder_threshold <= max_capacity`
/// - `max_capacity > 0`
///
/// Every operation validates first and writes second, so a failed call leaves
/// the record untouched. The record has no internal synchronization; callers
/// serialize access per record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockRecord {
    product_id: ProductId,
    location: Location,
    on_hand: i64,
    reserved: i64,
    reorder_threshold: i64,
    max_capacity: i64,
}

impl StockRecord {
    /// Create a record with nothing reserved.
    ///
    /// Checks run in a fixed order and the first failure is returned: product
    /// id, location, on hand, reorder threshold, max capacity, on hand within
    /// capacity, threshold within capacity.
    pub fn new(
        product_id: &str,
        location: &str,
        on_hand: i64,
        reorder_threshold: i64,
        max_capacity: i64,
    ) -> StockResult<Self> {
        let product_id = ProductId::parse(product_id)?;
        let location = Location::parse(location)?;

        if on_hand < 0 {
            return Err(StockError::invalid_argument("on hand cannot be negative"));
        }
        if reorder_threshold < 0 {
            return Err(StockError::invalid_argument(
                "reorder threshold cannot be negative",
            ));
        }
        if max_capacity < 1 {
            return Err(StockError::invalid_argument("max capacity must be at least 1"));
        }
        if on_hand > max_capacity {
            return Err(StockError::invalid_argument(format!(
                "on hand {on_hand} exceeds max capacity {max_capacity}"
            )));
        }
        if reorder_threshold > max_capacity {
            return Err(StockError::invalid_argument(format!(
                "reorder threshold {reorder_threshold} exceeds max capacity {max_capacity}"
            )));
        }

        Ok(Self {
            product_id,
            location,
            on_hand,
            reserved: 0,
            reorder_threshold,
            max_capacity,
        })
    }

    /// Rebuild a record from a snapshot, rejecting any snapshot that breaks an
    /// invariant.
    pub fn restore(snapshot: StockSnapshot) -> StockResult<Self> {
        let mut record = Self::new(
            &snapshot.product_id,
            &snapshot.location,
            snapshot.on_hand,
            snapshot.reorder_threshold,
            snapshot.max_capacity,
        )?;

        if snapshot.reserved < 0 {
            return Err(StockError::invalid_argument("reserved cannot be negative"));
        }
        if snapshot.reserved > snapshot.on_hand {
            return Err(StockError::invalid_argument(format!(
                "reserved {} exceeds on hand {}",
                snapshot.reserved, snapshot.on_hand
            )));
        }

        record.reserved = snapshot.reserved;
        Ok(record)
    }

    pub fn snapshot(&self) -> StockSnapshot {
        StockSnapshot {
            product_id: self.product_id.as_str().to_string(),
            location: self.location.as_str().to_string(),
            on_hand: self.on_hand,
            reserved: self.reserved,
            reorder_threshold: self.reorder_threshold,
            max_capacity: self.max_capacity,
        }
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn on_hand(&self) -> i64 {
        self.on_hand
    }

    pub fn reserved(&self) -> i64 {
        self.reserved
    }

    pub fn reorder_threshold(&self) -> i64 {
        self.reorder_threshold
    }

    pub fn max_capacity(&self) -> i64 {
        self.max_capacity
    }

    /// Units free to be newly reserved.
    pub fn available(&self) -> i64 {
        self.on_hand - self.reserved
    }

    /// True when available stock has dropped below the reorder threshold.
    pub fn is_reorder_needed(&self) -> bool {
        self.available() < self.reorder_threshold
    }
}

impl Entity for StockRecord {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.product_id
    }
}

impl StockRecord {
    /// Receive `amount` units into the location.
    pub fn add_stock(&mut self, amount: i64) -> StockResult<()> {
        ensure_positive(amount, "add amount")?;
        // Both sides are non-negative, so the subtraction cannot overflow.
        if amount > self.max_capacity - self.on_hand {
            return Err(StockError::CapacityExceeded {
                on_hand: self.on_hand,
                amount,
                max_capacity: self.max_capacity,
            });
        }

        self.on_hand += amount;
        tracing::trace!(product_id = %self.product_id, amount, on_hand = self.on_hand, "stock added");
        Ok(())
    }

    /// Hold `amount` available units for a pending order.
    pub fn reserve(&mut self, amount: i64) -> StockResult<()> {
        ensure_positive(amount, "reserve amount")?;
        let available = self.available();
        if amount > available {
            return Err(StockError::InsufficientAvailable {
                requested: amount,
                available,
            });
        }

        self.reserved += amount;
        tracing::trace!(product_id = %self.product_id, amount, reserved = self.reserved, "stock reserved");
        Ok(())
    }

    /// Give back `amount` previously reserved units.
    pub fn release_reservation(&mut self, amount: i64) -> StockResult<()> {
        ensure_positive(amount, "release amount")?;
        if amount > self.reserved {
            return Err(StockError::OverRelease {
                requested: amount,
                reserved: self.reserved,
            });
        }

        self.reserved -= amount;
        tracing::trace!(product_id = %self.product_id, amount, reserved = self.reserved, "reservation released");
        Ok(())
    }

    /// Ship `amount` reserved units out of the location.
    pub fn ship_reserved(&mut self, amount: i64) -> StockResult<()> {
        ensure_positive(amount, "ship amount")?;
        if amount > self.reserved {
            return Err(StockError::OverShip {
                requested: amount,
                reserved: self.reserved,
            });
        }

        self.reserved -= amount;
        self.on_hand -= amount;
        tracing::trace!(product_id = %self.product_id, amount, on_hand = self.on_hand, "reserved stock shipped");
        Ok(())
    }

    /// Write off `amount` damaged units, whether or not they were reserved.
    ///
    /// Reservations that no longer fit in the remaining stock are cut down to
    /// the new on-hand quantity. The reservation holder gets no error for this;
    /// it is only logged.
    pub fn remove_damaged(&mut self, amount: i64) -> StockResult<()> {
        ensure_positive(amount, "damaged amount")?;
        if amount > self.on_hand {
            return Err(StockError::OverRemoval {
                requested: amount,
                on_hand: self.on_hand,
            });
        }

        self.on_hand -= amount;
        if self.reserved > self.on_hand {
            let dropped = self.reserved - self.on_hand;
            self.reserved = self.on_hand;
            tracing::warn!(
                product_id = %self.product_id,
                location = %self.location,
                dropped,
                reserved = self.reserved,
                "damaged stock removal capped reservations"
            );
        }
        tracing::trace!(product_id = %self.product_id, amount, on_hand = self.on_hand, "damaged stock removed");
        Ok(())
    }

    pub fn update_reorder_threshold(&mut self, new_threshold: i64) -> StockResult<()> {
        if new_threshold < 0 {
            return Err(StockError::invalid_argument(
                "reorder threshold cannot be negative",
            ));
        }
        if new_threshold > self.max_capacity {
            return Err(StockError::invalid_argument(format!(
                "reorder threshold {new_threshold} exceeds max capacity {}",
                self.max_capacity
            )));
        }

        self.reorder_threshold = new_threshold;
        Ok(())
    }

    /// Resize the location. A reorder threshold above the new capacity is
    /// lowered to it.
    pub fn update_max_capacity(&mut self, new_capacity: i64) -> StockResult<()> {
        if new_capacity < 1 {
            return Err(StockError::invalid_argument("max capacity must be at least 1"));
        }
        if new_capacity < self.on_hand {
            return Err(StockError::CapacityBelowOnHand {
                new_capacity,
                on_hand: self.on_hand,
            });
        }

        self.max_capacity = new_capacity;
        if self.reorder_threshold > new_capacity {
            tracing::debug!(
                product_id = %self.product_id,
                from = self.reorder_threshold,
                to = new_capacity,
                "reorder threshold capped to new max capacity"
            );
            self.reorder_threshold = new_capacity;
        }
        Ok(())
    }

    /// Move the record to another location code. Surrounding whitespace is
    /// dropped.
    pub fn change_location(&mut self, new_location: &str) -> StockResult<()> {
        self.location = Location::parse(new_location)?;
        Ok(())
    }
}

fn ensure_positive(amount: i64, what: &str) -> StockResult<()> {
    if amount <= 0 {
        return Err(StockError::invalid_argument(format!(
            "{what} must be positive, got {amount}"
        )));
    }
    Ok(())
}

impl core::fmt::Display for StockRecord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "StockRecord{{productId='{}', location='{}', onHand={}, reserved={}, reorderThreshold={}, maxCapacity={}}}",
            self.product_id,
            self.location,
            self.on_hand,
            self.reserved,
            self.reorder_threshold,
            self.max_capacity
        )
    }
}
