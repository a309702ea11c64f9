use rubli_core::enums::SortOrder;
use serde::Serialize;

/// Active sort column and direction for a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortState<F> {
    field: F,
    order: SortOrder,
}

impl<F: Copy + PartialEq> SortState<F> {
    /// Sort by `field`, descending.
    #[must_use]
    pub const fn new(field: F) -> Self {
        Self {
            field,
            order: SortOrder::Desc,
        }
    }

    #[must_use]
    pub const fn field(&self) -> F {
        self.field
    }

    #[must_use]
    pub const fn order(&self) -> SortOrder {
        self.order
    }

    /// Re-selecting the active field flips direction; any other field becomes
    /// active with descending order.
    pub fn select(&mut self, field: F) {
        if field == self.field {
            self.order = self.order.flipped();
        } else {
            self.field = field;
            self.order = SortOrder::Desc;
        }
    }
}
