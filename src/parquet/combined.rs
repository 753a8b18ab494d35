//! Save a combined dataset to a parquet file.

use std::{fs::File, path::PathBuf, sync::Arc};

use anyhow::Result;
use arrow::{
    array::{ArrayRef, Date32Array, Float64Array, StringArray},
    datatypes::{DataType, Field, Schema},
    record_batch::RecordBatch,
};
use chrono::{Datelike, NaiveDate};
use parquet::{arrow::ArrowWriter, file::properties::WriterProperties};

use crate::frame::CombinedFrame;

/// Writes one combined dataset: `time` (Date32), `station`, then one
/// nullable Float64 column per measurement in group order.
pub fn save_combined(frame: &CombinedFrame, file_path: &PathBuf) -> Result<()> {
    let file = File::create(file_path)?;

    let mut fields = vec![
        Field::new("time", DataType::Date32, false),
        Field::new("station", DataType::Utf8, false),
    ];
    for column in &frame.columns {
        fields.push(Field::new(&column.name, DataType::Float64, true));
    }
    let schema = Arc::new(Schema::new(fields));

    let props = WriterProperties::builder()
        .set_compression(parquet::basic::Compression::SNAPPY)
        .build();

    let mut writer = ArrowWriter::try_new(file, schema.clone(), Some(props))?;

    let mut arrays: Vec<ArrayRef> = vec![
        Arc::new(Date32Array::from(date32_values(&frame.dates))),
        Arc::new(StringArray::from(frame.stations.clone())),
    ];
    for column in &frame.columns {
        arrays.push(Arc::new(Float64Array::from(column.values.clone())));
    }

    let batch = RecordBatch::try_new(schema, arrays)?;
    writer.write(&batch)?;
    writer.close()?;

    Ok(())
}

/// Days since the Unix epoch, the Date32 representation.
pub fn date32_values(dates: &[NaiveDate]) -> Vec<i32> {
    let epoch_offset = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap().num_days_from_ce();

    dates
        .iter()
        .map(|d| d.num_days_from_ce() - epoch_offset)
        .collect()
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod test {
    use arrow::array::Array;
    use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
    use tempfile::NamedTempFile;

    use crate::frame::Column;

    use super::*;

    #[test]
    fn should_validate_combined_schema_and_data() {
        // arrange
        let frame = combined_fixture();
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_path_buf();

        // act
        save_combined(&frame, &path).unwrap();

        // assert
        let reader = ParquetRecordBatchReaderBuilder::try_new(File::open(&path).unwrap())
            .unwrap()
            .build()
            .unwrap();
        let batches: Vec<_> = reader.map(|b| b.unwrap()).collect();
        assert_eq!(batches.len(), 1);

        let batch = &batches[0];
        let schema = batch.schema();
        let names: Vec<&str> = schema
            .fields()
            .iter()
            .map(|f| f.name().as_str())
            .collect();
        assert_eq!(names, vec!["time", "station", "chl", "sst"]);
        assert_eq!(batch.num_rows(), 3);

        let stations = batch
            .column(1)
            .as_any()
            .downcast_ref::<StringArray>()
            .unwrap();
        assert_eq!(stations.value(0), "Pioneer");
        assert_eq!(stations.value(2), "Irminger");

        let chl = batch
            .column(2)
            .as_any()
            .downcast_ref::<Float64Array>()
            .unwrap();
        assert_eq!(chl.value(0), 1.5);
        assert!(chl.is_null(1));
    }

    #[test]
    fn should_convert_dates_to_days_since_epoch() {
        let dates = vec![
            NaiveDate::from_ymd_opt(1970, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(1970, 1, 31).unwrap(),
        ];

        assert_eq!(date32_values(&dates), vec![0, 30]);
    }

    fn combined_fixture() -> CombinedFrame {
        CombinedFrame {
            dates: vec![
                NaiveDate::from_ymd_opt(2021, 6, 1).unwrap(),
                NaiveDate::from_ymd_opt(2021, 6, 2).unwrap(),
                NaiveDate::from_ymd_opt(2021, 6, 1).unwrap(),
            ],
            stations: vec![
                "Pioneer".to_string(),
                "Pioneer".to_string(),
                "Irminger".to_string(),
            ],
            columns: vec![
                Column {
                    name: "chl".to_string(),
                    values: vec![Some(1.5), None, Some(0.8)],
                },
                Column {
                    name: "sst".to_string(),
                    values: vec![Some(14.2), Some(14.9), None],
                },
            ],
        }
    }
}
