// ==========================================
// Fleetify Import Core - Domain Types
// ==========================================
// Role: entity kinds, field types, cell values, account classification
// Red line: no parsing policy here beyond FromStr / Display
// ==========================================

use crate::importer::error::ImportError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// EntityKind - record type of an import batch
// ==========================================
// Drives header disambiguation (phone / amount / description aliases)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Customer,
    Vehicle,
    Contract,
    Payment,
    ChartAccount,
}

impl EntityKind {
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Customer,
        EntityKind::Vehicle,
        EntityKind::Contract,
        EntityKind::Payment,
        EntityKind::ChartAccount,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Customer => "customer",
            EntityKind::Vehicle => "vehicle",
            EntityKind::Contract => "contract",
            EntityKind::Payment => "payment",
            EntityKind::ChartAccount => "chart_account",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = ImportError;

    /// Unknown kinds are a caller bug, not a row-level problem.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "customer" | "customers" => Ok(EntityKind::Customer),
            "vehicle" | "vehicles" => Ok(EntityKind::Vehicle),
            "contract" | "contracts" => Ok(EntityKind::Contract),
            "payment" | "payments" => Ok(EntityKind::Payment),
            "chart_account" | "chart_accounts" | "chart_of_accounts" | "account" | "accounts" => {
                Ok(EntityKind::ChartAccount)
            }
            _ => Err(ImportError::UnknownEntityKind(s.to_string())),
        }
    }
}

// ==========================================
// FieldType - inferred or declared column type
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Boolean,
    Number,
    Date,
    Email,
    Text,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Boolean => write!(f, "boolean"),
            FieldType::Number => write!(f, "number"),
            FieldType::Date => write!(f, "date"),
            FieldType::Email => write!(f, "email"),
            FieldType::Text => write!(f, "text"),
        }
    }
}

// ==========================================
// CellValue - a single cell, raw or coerced
// ==========================================
// Raw cells from the external reader are Text / Number / Empty.
// Boolean and Date only appear after cleaning.
// Untagged: Text precedes Date, raw date strings stay text until cleaned.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Empty,
    Boolean(bool),
    Number(f64),
    Text(String),
    Date(NaiveDate),
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    /// Empty cell or whitespace-only text.
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Trimmed textual form; `None` for empty cells.
    pub fn to_trimmed_text(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        Some(self.to_string().trim().to_string())
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Boolean(b) => write!(f, "{}", b),
            // integral numbers print without a trailing ".0" so codes like 111 stay "111"
            CellValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(value.to_string())
        }
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        if value.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(value)
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

// ==========================================
// AccountType / BalanceType - chart-of-accounts classification
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    Assets,
    Liabilities,
    Equity,
    Revenue,
    Expenses,
}

impl AccountType {
    /// Classification by the leading digit of an account code.
    pub fn from_code(code: &str) -> Self {
        match code.chars().next() {
            Some('2') => AccountType::Liabilities,
            Some('3') => AccountType::Equity,
            Some('4') => AccountType::Revenue,
            Some('5'..='9') => AccountType::Expenses,
            _ => AccountType::Assets,
        }
    }

    pub fn natural_balance(&self) -> BalanceType {
        match self {
            AccountType::Assets | AccountType::Expenses => BalanceType::Debit,
            AccountType::Liabilities | AccountType::Equity | AccountType::Revenue => {
                BalanceType::Credit
            }
        }
    }
}

impl FromStr for AccountType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "assets" | "asset" | "أصول" | "الأصول" => Ok(AccountType::Assets),
            "liabilities" | "liability" | "خصوم" | "الخصوم" | "التزامات" => {
                Ok(AccountType::Liabilities)
            }
            "equity" | "حقوق الملكية" | "حقوق ملكية" => Ok(AccountType::Equity),
            "revenue" | "revenues" | "income" | "إيرادات" | "الإيرادات" => {
                Ok(AccountType::Revenue)
            }
            "expenses" | "expense" | "مصروفات" | "المصروفات" => Ok(AccountType::Expenses),
            other => Err(format!("unknown account type: {}", other)),
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountType::Assets => write!(f, "assets"),
            AccountType::Liabilities => write!(f, "liabilities"),
            AccountType::Equity => write!(f, "equity"),
            AccountType::Revenue => write!(f, "revenue"),
            AccountType::Expenses => write!(f, "expenses"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceType {
    Debit,
    Credit,
}

impl FromStr for BalanceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debit" | "dr" | "مدين" => Ok(BalanceType::Debit),
            "credit" | "cr" | "دائن" => Ok(BalanceType::Credit),
            other => Err(format!("unknown balance type: {}", other)),
        }
    }
}

impl fmt::Display for BalanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BalanceType::Debit => write!(f, "debit"),
            BalanceType::Credit => write!(f, "credit"),
        }
    }
}
