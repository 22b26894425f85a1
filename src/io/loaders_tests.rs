#[cfg(test)]
mod tests {
    use crate::core::error::AnalysisError;
    use crate::io::loaders::{normalize, to_records, BirthsLoader, BirthsSourceType};
    use chrono::NaiveDate;
    use polars::prelude::*;
    use tempfile::NamedTempFile;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Raw source shape: one row per (date, state), date as Date dtype.
    fn raw_per_state_frame() -> DataFrame {
        let dates = vec![
            date(1999, 1, 2),
            date(1999, 1, 1),
            date(1999, 1, 1),
            date(1999, 1, 3),
        ];
        let date_series = DateChunked::from_naive_date("date", dates.into_iter()).into_series();
        let states = Series::new("state", &["Johor", "Johor", "Kedah", "Johor"]);
        let births = Series::new("births", &[50i64, 7, 3, 30]);
        DataFrame::new(vec![date_series, states, births]).unwrap()
    }

    fn write_temp_parquet(mut df: DataFrame) -> NamedTempFile {
        let temp_file = NamedTempFile::with_suffix(".parquet").unwrap();
        let file = std::fs::File::create(temp_file.path()).unwrap();
        ParquetWriter::new(file).finish(&mut df).unwrap();
        temp_file
    }

    #[test]
    fn normalize_sums_states_onto_one_row_per_date() {
        let canonical = normalize(raw_per_state_frame()).unwrap();

        // Two Jan 1 state rows collapse into one nationwide row.
        assert_eq!(canonical.height(), 3);

        let names = canonical.get_column_names();
        assert_eq!(names, &["birthdate", "year", "month", "day", "births"]);

        let births = canonical.column("births").unwrap().i64().unwrap();
        // Sorted by date: Jan 1 (7 + 3), Jan 2 (50), Jan 3 (30).
        assert_eq!(births.get(0), Some(10));
        assert_eq!(births.get(1), Some(50));
        assert_eq!(births.get(2), Some(30));
    }

    #[test]
    fn normalize_pins_canonical_dtypes() {
        let canonical = normalize(raw_per_state_frame()).unwrap();

        assert_eq!(
            canonical.column("birthdate").unwrap().dtype(),
            &DataType::Date
        );
        assert_eq!(canonical.column("year").unwrap().dtype(), &DataType::Int32);
        assert_eq!(canonical.column("month").unwrap().dtype(), &DataType::Int32);
        assert_eq!(canonical.column("day").unwrap().dtype(), &DataType::Int32);
        assert_eq!(canonical.column("births").unwrap().dtype(), &DataType::Int64);
    }

    #[test]
    fn normalize_parses_string_dates() {
        let df = DataFrame::new(vec![
            Series::new("date", &["1999-01-02", "1999-01-01"]),
            Series::new("state", &["Johor", "Kedah"]),
            Series::new("births", &[20i64, 10]),
        ])
        .unwrap();

        let canonical = normalize(df).unwrap();
        assert_eq!(canonical.height(), 2);

        let years = canonical.column("year").unwrap().i32().unwrap();
        let days = canonical.column("day").unwrap().i32().unwrap();
        assert_eq!(years.get(0), Some(1999));
        assert_eq!(days.get(0), Some(1));
        assert_eq!(days.get(1), Some(2));
    }

    #[test]
    fn normalize_requires_date_and_births_columns() {
        let df = DataFrame::new(vec![
            Series::new("state", &["Johor"]),
            Series::new("births", &[10i64]),
        ])
        .unwrap();

        let err = normalize(df).unwrap_err();
        assert!(matches!(err, AnalysisError::DataUnavailable(_)));
        assert!(err.to_string().contains("date"));

        let df = DataFrame::new(vec![Series::new(
            "date",
            &["1999-01-01"],
        )])
        .unwrap();
        let err = normalize(df).unwrap_err();
        assert!(err.to_string().contains("births"));
    }

    #[test]
    fn normalize_rejects_negative_birth_counts() {
        let df = DataFrame::new(vec![
            Series::new("date", &["1999-01-01"]),
            Series::new("births", &[-5i64]),
        ])
        .unwrap();

        let err = normalize(df).unwrap_err();
        assert!(matches!(err, AnalysisError::DataUnavailable(_)));
        assert!(err.to_string().contains("negative"));
    }

    #[test]
    fn load_from_file_roundtrip() {
        let temp_file = write_temp_parquet(raw_per_state_frame());
        let result = BirthsLoader::load_from_file(temp_file.path()).unwrap();

        assert_eq!(result.source_type, BirthsSourceType::LocalFile);
        assert_eq!(result.num_days, 3);
        assert_eq!(result.dataframe.height(), 3);
    }

    #[test]
    fn load_from_file_rejects_unsupported_extension() {
        let temp_file = NamedTempFile::with_suffix(".csv").unwrap();
        let err = BirthsLoader::load_from_file(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("Unsupported file format"));

        let err =
            BirthsLoader::load_from_file(std::path::Path::new("/tmp/no_extension")).unwrap_err();
        assert!(err.to_string().contains("no extension"));
    }

    #[test]
    fn load_from_bytes_matches_file_load() {
        let temp_file = write_temp_parquet(raw_per_state_frame());
        let bytes = std::fs::read(temp_file.path()).unwrap();

        let result = BirthsLoader::load_from_bytes(&bytes).unwrap();
        assert_eq!(result.source_type, BirthsSourceType::Memory);
        assert_eq!(result.num_days, 3);
    }

    #[test]
    fn to_records_preserves_order_and_values() {
        let canonical = normalize(raw_per_state_frame()).unwrap();
        let records = to_records(&canonical).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].birthdate, date(1999, 1, 1));
        assert_eq!(records[0].births, 10);
        assert_eq!(records[0].year, 1999);
        assert_eq!(records[0].month, 1);
        assert_eq!(records[0].day, 1);
        assert_eq!(records[2].birthdate, date(1999, 1, 3));
        assert_eq!(records[2].births, 30);
    }
}
