//! 병합 결과 채움률 검사

use crate::loader::Table;
use serde::Serialize;

/// 컬럼 하나의 채움률
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FillRate {
    pub column: String,
    /// 헤더에 있는 컬럼인지
    pub present: bool,
    pub filled: usize,
    pub total: usize,
}

impl FillRate {
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.filled as f64 / self.total as f64 * 100.0
    }
}

/// 컬럼별로 공백이 아닌 값의 수를 센다
///
/// `columns`가 비어 있으면 헤더의 모든 컬럼.
pub fn fill_rates(table: &Table, columns: &[String]) -> Vec<FillRate> {
    let targets: Vec<String> = if columns.is_empty() {
        table.header().names().to_vec()
    } else {
        columns.to_vec()
    };

    targets
        .into_iter()
        .map(|column| {
            let present = table.header().contains(&column);
            if !present {
                log::warn!("컬럼 '{}' 없음", column);
            }
            let filled = table
                .records()
                .filter(|record| !record.get(&column).trim().is_empty())
                .count();
            FillRate { column, present, filled, total: table.len() }
        })
        .collect()
}

pub fn print_fill_rates(rates: &[FillRate]) {
    for rate in rates {
        if rate.present {
            println!(
                "  {:<24} {:>6}/{:<6} ({:.1}%)",
                rate.column,
                rate.filled,
                rate.total,
                rate.percent()
            );
        } else {
            println!("  {:<24} (컬럼 없음)", rate.column);
        }
    }
}
