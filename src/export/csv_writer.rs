//! 스프레드시트 도구가 바로 열 수 있는 UTF-8(BOM) CSV 쓰기

use crate::error::Result;
use market_merge_common::{output_header, MergedRow};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// 헤더와 행을 BOM 붙은 UTF-8 CSV로 저장
pub fn write_records<H, R, I>(path: &Path, header: &[H], records: I) -> Result<usize>
where
    H: AsRef<str>,
    R: IntoIterator,
    R::Item: AsRef<[u8]>,
    I: IntoIterator<Item = R>,
{
    let mut file = BufWriter::new(File::create(path)?);
    file.write_all(UTF8_BOM)?;

    let mut writer = csv::Writer::from_writer(file);
    writer.write_record(header.iter().map(|h| h.as_ref()))?;

    let mut written = 0;
    for record in records {
        writer.write_record(record)?;
        written += 1;
    }
    writer.flush()?;
    Ok(written)
}

/// 병합 행 전체 저장
pub fn write_merged(path: &Path, rows: &[MergedRow]) -> Result<usize> {
    write_records(path, &output_header(), rows.iter().map(MergedRow::to_record))
}

/// 양쪽 매칭 행만 저장
pub fn write_matched(path: &Path, rows: &[MergedRow]) -> Result<usize> {
    write_records(
        path,
        &output_header(),
        rows.iter().filter(|r| r.is_matched()).map(MergedRow::to_record),
    )
}
