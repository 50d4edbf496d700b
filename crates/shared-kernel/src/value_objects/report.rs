// crates/shared-kernel/src/value_objects/report.rs
use serde::{Deserialize, Serialize};

use super::counts::TokenCount;
use super::file_count::FileCount;
use crate::error::{BudgetError, Result};

/// PICO-8 のトークン上限
pub const DEFAULT_TOKEN_LIMIT: usize = 8192;

/// トークン予算
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Budget(usize);

impl Budget {
    /// # Errors
    ///
    /// Returns an error when `limit` is zero or does not fit in `i64`.
    pub fn new(limit: usize) -> Result<Self> {
        if limit == 0 {
            return Err(BudgetError::Zero);
        }
        if i64::try_from(limit).is_err() {
            return Err(BudgetError::TooLarge {
                limit,
                max: i64::MAX.unsigned_abs() as usize,
            });
        }
        Ok(Self(limit))
    }

    #[inline]
    pub const fn limit(self) -> usize {
        self.0
    }

    /// `limit - total`。上限を超えると負になる。
    #[must_use]
    pub fn remaining(self, total: TokenCount) -> i64 {
        let limit = i64::try_from(self.0).unwrap_or(i64::MAX);
        let total = i64::try_from(total.value()).unwrap_or(i64::MAX);
        limit.saturating_sub(total)
    }
}

impl Default for Budget {
    fn default() -> Self {
        Self(DEFAULT_TOKEN_LIMIT)
    }
}

/// ワークスペース全体の集計
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateReport {
    pub total: TokenCount,
    pub limit: usize,
    pub remaining: i64,
    pub files: Vec<FileCount>,
}

impl AggregateReport {
    #[must_use]
    pub fn new(files: Vec<FileCount>, budget: Budget) -> Self {
        let total: TokenCount = files.iter().map(|f| f.tokens).sum();
        Self {
            total,
            limit: budget.limit(),
            remaining: budget.remaining(total),
            files,
        }
    }

    #[must_use]
    pub fn is_over_budget(&self) -> bool {
        self.remaining < 0
    }

    /// 残りの割合 (%、切り捨て)。超過時は負になる。
    #[must_use]
    pub fn remaining_percent(&self) -> i64 {
        let limit = i64::try_from(self.limit).unwrap_or(i64::MAX).max(1);
        self.remaining.saturating_mul(100).div_euclid(limit)
    }
}
