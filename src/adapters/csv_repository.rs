//! CSV file trade repository.

use crate::domain::error::TradepipeError;
use crate::domain::trade::TradeRecord;
use crate::ports::logger_port::LoggerPort;
use crate::ports::repository_port::RepositoryPort;
use std::fs::File;
use std::io;
use std::path::PathBuf;

const HEADER: [&str; 4] = ["source_currency", "destination_currency", "lots", "price"];

pub struct CsvRepository {
    path: PathBuf,
}

impl CsvRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Reads back every trade previously written to the file.
    pub fn load_records(&self) -> Result<Vec<TradeRecord>, TradepipeError> {
        let mut rdr = csv::Reader::from_path(&self.path).map_err(|e| TradepipeError::Storage {
            reason: format!("failed to read {}: {}", self.path.display(), e),
        })?;

        let mut trades = Vec::new();
        for result in rdr.records() {
            let record = result.map_err(|e| TradepipeError::Storage {
                reason: format!("CSV parse error: {}", e),
            })?;

            let text = |i: usize, name: &str| {
                record
                    .get(i)
                    .map(str::to_string)
                    .ok_or_else(|| TradepipeError::Storage {
                        reason: format!("missing {} column", name),
                    })
            };
            let number = |i: usize, name: &str| -> Result<f64, TradepipeError> {
                text(i, name)?.parse().map_err(|e| TradepipeError::Storage {
                    reason: format!("invalid {} value: {}", name, e),
                })
            };

            trades.push(TradeRecord {
                source_currency: text(0, "source_currency")?,
                destination_currency: text(1, "destination_currency")?,
                lots: number(2, "lots")?,
                price: number(3, "price")?,
            });
        }

        Ok(trades)
    }
}

/// Writes a header row plus one row per trade.
pub fn write_trades<W: io::Write>(writer: W, records: &[TradeRecord]) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)?;
    for trade in records {
        wtr.write_record([
            trade.source_currency.as_str(),
            trade.destination_currency.as_str(),
            trade.lots.to_string().as_str(),
            trade.price.to_string().as_str(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

impl RepositoryPort for CsvRepository {
    fn store_records(
        &self,
        records: &[TradeRecord],
        logger: &dyn LoggerPort,
    ) -> Result<(), TradepipeError> {
        let file = File::create(&self.path).map_err(|e| TradepipeError::Storage {
            reason: format!("failed to create {}: {}", self.path.display(), e),
        })?;
        write_trades(file, records).map_err(|e| TradepipeError::Storage {
            reason: format!("failed to write {}: {}", self.path.display(), e),
        })?;

        logger.log(&format!("INFO: {} trades processed", records.len()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::logger::NullLogger;
    use std::cell::RefCell;
    use std::fs;
    use tempfile::TempDir;

    #[derive(Default)]
    struct VecLogger {
        lines: RefCell<Vec<String>>,
    }

    impl LoggerPort for VecLogger {
        fn log(&self, message: &str) {
            self.lines.borrow_mut().push(message.to_string());
        }
    }

    fn sample_trades() -> Vec<TradeRecord> {
        vec![
            TradeRecord {
                source_currency: "GBP".into(),
                destination_currency: "USD".into(),
                lots: 0.01,
                price: 1.51,
            },
            TradeRecord {
                source_currency: "EUR".into(),
                destination_currency: "JPY".into(),
                lots: 2.5,
                price: 130.2,
            },
        ]
    }

    #[test]
    fn store_writes_header_and_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        let repo = CsvRepository::new(path.clone());

        repo.store_records(&sample_trades(), &NullLogger).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "source_currency,destination_currency,lots,price\n\
             GBP,USD,0.01,1.51\n\
             EUR,JPY,2.5,130.2\n"
        );
    }

    #[test]
    fn write_trades_to_buffer() {
        let mut buf = Vec::new();
        write_trades(&mut buf, &sample_trades()[..1]).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "source_currency,destination_currency,lots,price\nGBP,USD,0.01,1.51\n"
        );
    }

    #[test]
    fn store_logs_count() {
        let dir = TempDir::new().unwrap();
        let repo = CsvRepository::new(dir.path().join("out.csv"));
        let logger = VecLogger::default();

        repo.store_records(&sample_trades(), &logger).unwrap();

        assert_eq!(*logger.lines.borrow(), vec!["INFO: 2 trades processed"]);
    }

    #[test]
    fn load_reads_back_stored_trades() {
        let dir = TempDir::new().unwrap();
        let repo = CsvRepository::new(dir.path().join("out.csv"));
        repo.store_records(&sample_trades(), &NullLogger).unwrap();

        assert_eq!(repo.load_records().unwrap(), sample_trades());
    }

    #[test]
    fn store_empty_writes_only_header() {
        let dir = TempDir::new().unwrap();
        let repo = CsvRepository::new(dir.path().join("out.csv"));
        repo.store_records(&[], &NullLogger).unwrap();

        assert!(repo.load_records().unwrap().is_empty());
    }

    #[test]
    fn store_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let repo = CsvRepository::new(dir.path().join("nope").join("out.csv"));
        let result = repo.store_records(&sample_trades(), &NullLogger);
        assert!(matches!(result, Err(TradepipeError::Storage { .. })));
    }
}
