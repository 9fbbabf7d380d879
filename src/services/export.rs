//! Keyword CSV export.

use crate::model::KeywordResult;

pub const CSV_HEADER: &str = "Keyword,Search Volume,Difficulty,CPC,Intent,Trend";
pub const CSV_FILENAME: &str = "keywords.csv";

const HEADER_FIELDS: [&str; 6] = ["Keyword", "Search Volume", "Difficulty", "CPC", "Intent", "Trend"];

/// Serialize results as CSV: header first, `\n` between rows, no trailing
/// newline.
///
/// # Errors
///
/// Returns the writer's error if a record cannot be encoded.
pub fn to_csv(results: &[KeywordResult]) -> Result<String, csv::Error> {
    Ok(csv_lines(results)?.join("\n"))
}

/// Header then one encoded record per result, without terminators. Used for
/// streamed download bodies.
///
/// # Errors
///
/// Returns the writer's error if a record cannot be encoded.
pub fn csv_lines(results: &[KeywordResult]) -> Result<Vec<String>, csv::Error> {
    let mut lines = Vec::with_capacity(results.len() + 1);
    lines.push(encode_record(HEADER_FIELDS)?);
    for result in results {
        lines.push(encode_record([
            result.keyword.clone(),
            result.search_volume.to_string(),
            result.difficulty.to_string(),
            result.cpc.to_string(),
            result.intent.as_str().to_owned(),
            result.trend.as_str().to_owned(),
        ])?);
    }
    Ok(lines)
}

fn encode_record<I>(fields: I) -> Result<String, csv::Error>
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(fields)?;
    let mut bytes = writer.into_inner().map_err(|e| csv::Error::from(e.into_error()))?;
    if bytes.last() == Some(&b'\n') {
        bytes.pop();
    }
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
#[path = "export_test.rs"]
mod tests;
