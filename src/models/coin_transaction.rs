use std::fmt;
use std::str::FromStr;

/// Why a coin transaction happened. The code is the submitted form value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionType {
    Earned,
    Purchased,
    Gift,
    Refund,
    AdminAdjustment,
}

impl TransactionType {
    /// Display order for the type select.
    pub const ALL: [TransactionType; 5] = [
        TransactionType::Earned,
        TransactionType::Purchased,
        TransactionType::Gift,
        TransactionType::Refund,
        TransactionType::AdminAdjustment,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            TransactionType::Earned => "earned",
            TransactionType::Purchased => "purchased",
            TransactionType::Gift => "gift",
            TransactionType::Refund => "refund",
            TransactionType::AdminAdjustment => "admin_adjustment",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::Earned => "Earned",
            TransactionType::Purchased => "Purchased",
            TransactionType::Gift => "Gift",
            TransactionType::Refund => "Refund",
            TransactionType::AdminAdjustment => "Admin Adjustment",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TransactionType::ALL
            .into_iter()
            .find(|t| t.code() == s)
            .ok_or_else(|| format!("unknown transaction type '{s}'"))
    }
}
