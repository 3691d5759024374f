use std::error::Error;
use std::fmt::Display;
use std::path::Path;

use csv::ReaderBuilder;
use sr_core::common::utils::{parse_price, parse_price_list};
use sr_core::{ErrCode, SrConfig, SrException};

/// Sample series used when no data is supplied
pub const DEFAULT_DATA: &str = "1.45, 1.48, 1.52, 1.49, 1.51, 1.47, 1.53, 1.46, 1.50, 1.49, 1.51, \
                                1.52, 1.50, 1.48, 1.47, 1.49, 1.51, 1.50, 5.20, 9.80, 10.10";

pub const TARGET_RANGE: (f64, f64) = (0.01, 100.0);
pub const THRESHOLD_RANGE: (f64, f64) = (0.001, 0.1);
pub const WINDOW_RANGE: (usize, usize) = (1, 50);

pub fn prices_from_text(text: &str) -> Result<Vec<f64>, SrException> {
    parse_price_list(text)
}

/// Read one column of a CSV file as a price series.
///
/// With a column name the first row must be a header naming it. Without one the
/// first column is read, and the first row is only skipped as a header when its
/// value is not a number, so headerless files keep every observation.
pub fn prices_from_csv(path: &Path, column: Option<&str>) -> Result<Vec<f64>, Box<dyn Error>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;
    let mut records = rdr.records().peekable();

    let col_idx = match column {
        Some(name) => {
            let header = records.next().transpose()?;
            header
                .as_ref()
                .and_then(|h| h.iter().position(|f| f == name))
                .ok_or_else(|| {
                    SrException::new(
                        format!("column `{}` not found in {}", name, path.display()),
                        ErrCode::ParaError,
                    )
                })?
        }
        None => {
            let is_header = match records.peek() {
                Some(Ok(first)) => first
                    .get(0)
                    .is_some_and(|f| !f.is_empty() && parse_price(f).is_none()),
                _ => false,
            };
            if is_header {
                log::debug!("treating first row of {} as a header", path.display());
                records.next();
            }
            0
        }
    };

    let mut prices = Vec::new();
    for (row, record) in records.enumerate() {
        let record = record?;
        let Some(field) = record.get(col_idx) else {
            continue;
        };
        if field.is_empty() {
            continue;
        }
        let value = parse_price(field).ok_or_else(|| {
            SrException::new(
                format!("`{}` on data row {} is not a valid number", field, row + 1),
                ErrCode::InvalidNumber,
            )
        })?;
        prices.push(value);
    }

    if prices.is_empty() {
        return Err(Box::new(SrException::new(
            format!("no numeric values found in {}", path.display()),
            ErrCode::NoData,
        )));
    }
    Ok(prices)
}

fn parse_in_range(s: &str, (lo, hi): (f64, f64)) -> Result<f64, String> {
    let v: f64 = s.trim().parse().map_err(|_| format!("`{}` is not a number", s))?;
    if v < lo || v > hi {
        return Err(format!("{} is outside {}..={}", v, lo, hi));
    }
    Ok(v)
}

pub fn parse_target(s: &str) -> Result<f64, String> {
    parse_in_range(s, TARGET_RANGE)
}

pub fn parse_threshold(s: &str) -> Result<f64, String> {
    parse_in_range(s, THRESHOLD_RANGE)
}

fn check_range<T: PartialOrd + Display>(name: &str, v: T, (lo, hi): (T, T)) -> Result<(), SrException> {
    if v < lo || v > hi {
        return Err(SrException::new(
            format!("{}={} is outside {}..={}", name, v, lo, hi),
            ErrCode::ParaError,
        ));
    }
    Ok(())
}

/// Apply the interactive ranges to a fully merged config, saved values included
pub fn check_ranges(config: &SrConfig) -> Result<(), SrException> {
    check_range("target", config.target, TARGET_RANGE)?;
    check_range("threshold", config.threshold, THRESHOLD_RANGE)?;
    check_range("window", config.window, WINDOW_RANGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_data_parses() {
        let prices = prices_from_text(DEFAULT_DATA).unwrap();
        assert_eq!(prices.len(), 21);
        assert_eq!(prices.last(), Some(&10.10));
    }

    #[test]
    fn test_csv_first_column() {
        let file = csv_file("close,volume\n1.5,100\n1.6,200\n,300\n1.7,50\n");
        let prices = prices_from_csv(file.path(), None).unwrap();
        assert_eq!(prices, vec![1.5, 1.6, 1.7]);
    }

    #[test]
    fn test_csv_without_header_keeps_first_row() {
        let file = csv_file("1.5\n1.6\n1.7\n");
        let prices = prices_from_csv(file.path(), None).unwrap();
        assert_eq!(prices, vec![1.5, 1.6, 1.7]);

        let file = csv_file("1.5,100\n1.6,200\n");
        assert_eq!(prices_from_csv(file.path(), None).unwrap(), vec![1.5, 1.6]);
    }

    #[test]
    fn test_csv_named_column() {
        let file = csv_file("time,close\n2024-01-01,1.5\n2024-01-02, 1.6\n");
        let prices = prices_from_csv(file.path(), Some("close")).unwrap();
        assert_eq!(prices, vec![1.5, 1.6]);

        assert!(prices_from_csv(file.path(), Some("open")).is_err());
    }

    #[test]
    fn test_csv_bad_value() {
        let file = csv_file("close\n1.5\noops\n");
        let err = prices_from_csv(file.path(), None).unwrap_err();
        let err = err.downcast_ref::<SrException>().unwrap();
        assert_eq!(err.errcode, ErrCode::InvalidNumber);
        assert!(err.msg.contains("row 2"));
    }

    #[test]
    fn test_csv_empty() {
        let file = csv_file("close\n");
        let err = prices_from_csv(file.path(), None).unwrap_err();
        assert_eq!(err.downcast_ref::<SrException>().unwrap().errcode, ErrCode::NoData);
    }

    #[test]
    fn test_ranges() {
        assert_eq!(parse_target("1.5"), Ok(1.5));
        assert!(parse_target("0").is_err());
        assert!(parse_target("abc").is_err());
        assert_eq!(parse_threshold("0.05"), Ok(0.05));
        assert!(parse_threshold("0.5").is_err());
    }

    #[test]
    fn test_check_ranges() {
        assert!(check_ranges(&SrConfig::default()).is_ok());

        let config = SrConfig {
            window: 80,
            ..SrConfig::default()
        };
        let err = check_ranges(&config).unwrap_err();
        assert_eq!(err.errcode, ErrCode::ParaError);
        assert!(err.msg.contains("window=80"));

        let config = SrConfig {
            threshold: 0.5,
            ..SrConfig::default()
        };
        assert!(check_ranges(&config).is_err());

        let config = SrConfig {
            target: 0.0,
            ..SrConfig::default()
        };
        assert!(check_ranges(&config).is_err());
    }
}
