//! Save the long-form merged dataset to a parquet file.

use std::{fs::File, path::PathBuf, sync::Arc};

use anyhow::Result;
use arrow::{
    array::{ArrayRef, Date32Array, Float64Array, StringArray},
    datatypes::{DataType, Field, Schema},
    record_batch::RecordBatch,
};
use parquet::{arrow::ArrowWriter, file::properties::WriterProperties};

use crate::merge::LongFormFrame;

use super::combined::date32_values;

/// Writes the long-form dataset: one row per (time, station, measurement),
/// with chlorophyll as the constant companion column.
pub fn save_long_form(frame: &LongFormFrame, file_path: &PathBuf) -> Result<()> {
    let file = File::create(file_path)?;

    let schema = Arc::new(Schema::new(vec![
        Field::new("time", DataType::Date32, false),
        Field::new("station", DataType::Utf8, false),
        Field::new("chl", DataType::Float64, true),
        Field::new("measurement", DataType::Utf8, false),
        Field::new("value", DataType::Float64, true),
    ]));

    let props = WriterProperties::builder()
        .set_compression(parquet::basic::Compression::SNAPPY)
        .build();

    let mut writer = ArrowWriter::try_new(file, schema.clone(), Some(props))?;

    let arrays: Vec<ArrayRef> = vec![
        Arc::new(Date32Array::from(date32_values(&frame.dates))),
        Arc::new(StringArray::from(frame.stations.clone())),
        Arc::new(Float64Array::from(frame.chl.clone())),
        Arc::new(StringArray::from(frame.measurements.clone())),
        Arc::new(Float64Array::from(frame.values.clone())),
    ];

    let batch = RecordBatch::try_new(schema, arrays)?;
    writer.write(&batch)?;
    writer.close()?;

    Ok(())
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod test {
    use arrow::array::Array;
    use chrono::NaiveDate;
    use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn should_validate_long_form_schema_and_data() {
        // arrange
        let frame = long_form_fixture();
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_path_buf();

        // act
        save_long_form(&frame, &path).unwrap();

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
        assert_eq!(names, vec!["time", "station", "chl", "measurement", "value"]);
        assert_eq!(batch.num_rows(), 3);

        let measurements = batch
            .column(3)
            .as_any()
            .downcast_ref::<StringArray>()
            .unwrap();
        assert_eq!(measurements.value(0), "sst");
        assert_eq!(measurements.value(1), "light");
        assert_eq!(measurements.value(2), "no3");

        let values = batch
            .column(4)
            .as_any()
            .downcast_ref::<Float64Array>()
            .unwrap();
        assert_eq!(values.value(0), 10.0);
        assert!(values.is_null(2));
    }

    fn long_form_fixture() -> LongFormFrame {
        let day = NaiveDate::from_ymd_opt(2021, 6, 1).unwrap();
        LongFormFrame {
            dates: vec![day; 3],
            stations: vec!["Pioneer".to_string(); 3],
            chl: vec![Some(5.0); 3],
            measurements: vec!["sst".to_string(), "light".to_string(), "no3".to_string()],
            values: vec![Some(10.0), Some(20.0), None],
        }
    }
}
