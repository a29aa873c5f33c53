use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::path::Path;

/// A parsed data table: one label per row, one fixed-length feature vector
/// per row, positionally aligned. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledDataset {
    pub labels: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

impl LabeledDataset {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn feature_count(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }
}

/// Loads a labeled dataset from a CSV file. The first row is a header and is
/// discarded; in every other row the first field is the label and the
/// remaining fields are numeric feature values.
///
/// Rows with an empty label are skipped with a warning. A row whose width
/// differs from the first data row's is an error, reported with its position.
pub fn load_labeled_dataset(csv_path: &Path) -> Result<LabeledDataset> {
    if !csv_path.exists() {
        return Err(anyhow::anyhow!("Data CSV file not found at: {:?}", csv_path));
    }

    let file = std::fs::File::open(csv_path)
        .with_context(|| format!("Failed to open data CSV file at {:?}", csv_path))?;
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let mut labels = Vec::new();
    let mut rows: Vec<Vec<f64>> = Vec::new();

    for (row_index, result) in rdr.records().enumerate() {
        let record = result
            .with_context(|| format!("Failed to read record at row index {}", row_index))?;

        let label = record
            .get(0)
            .ok_or_else(|| anyhow::anyhow!("Missing label at row {}", row_index))?
            .trim()
            .to_string();
        if label.is_empty() {
            eprintln!(
                "[WARNING] Skipping row {} of {:?}: empty label.",
                row_index, csv_path
            );
            continue;
        }

        let mut features = Vec::with_capacity(record.len().saturating_sub(1));
        for (col, field) in record.iter().skip(1).enumerate() {
            let value = field.trim().parse::<f64>().with_context(|| {
                format!(
                    "Non-numeric feature value '{}' at row {} ('{}'), column {}",
                    field, row_index, label, col
                )
            })?;
            features.push(value);
        }

        if let Some(first) = rows.first() {
            if features.len() != first.len() {
                return Err(anyhow::anyhow!(
                    "Row {} ('{}') has {} features, expected {}",
                    row_index,
                    label,
                    features.len(),
                    first.len()
                ));
            }
        }

        labels.push(label);
        rows.push(features);
    }

    if rows.is_empty() {
        return Err(anyhow::anyhow!("No data rows loaded from {:?}", csv_path));
    }
    if rows[0].is_empty() {
        return Err(anyhow::anyhow!(
            "Rows in {:?} carry a label but no feature values",
            csv_path
        ));
    }

    Ok(LabeledDataset { labels, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_csv_file() -> Result<NamedTempFile> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "Area,Income,Unemployment,Population")?;
        writeln!(file, "Alameda,75.2,8.1,1510.0")?;
        writeln!(file, "Butte,43.1,11.9,220.0")?;
        writeln!(file, ",1,2,3")?; // Empty label, should be skipped
        writeln!(file, "Colusa,50.5,17.6,21.4")?;
        file.flush()?;
        Ok(file)
    }

    #[test]
    fn test_load_labeled_dataset_success() -> Result<()> {
        let file = create_test_csv_file()?;
        let dataset = load_labeled_dataset(file.path())?;

        assert_eq!(dataset.row_count(), 3); // Empty-label row skipped
        assert_eq!(dataset.feature_count(), 3);
        assert_eq!(dataset.labels, vec!["Alameda", "Butte", "Colusa"]);
        assert_eq!(dataset.rows[0], vec![75.2, 8.1, 1510.0]);
        assert_eq!(dataset.rows[2], vec![50.5, 17.6, 21.4]);
        Ok(())
    }

    #[test]
    fn test_load_labeled_dataset_non_numeric_field() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "Area,Income")?;
        writeln!(file, "Alameda,seventy-five")?;
        file.flush()?;

        let result = load_labeled_dataset(file.path());
        assert!(result.is_err());
        let msg = format!("{:#}", result.unwrap_err());
        assert!(msg.contains("Non-numeric feature value 'seventy-five'"));
        assert!(msg.contains("'Alameda'"));
        Ok(())
    }

    #[test]
    fn test_load_labeled_dataset_ragged_row() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "Area,Income,Unemployment")?;
        writeln!(file, "Alameda,75.2,8.1")?;
        writeln!(file, "Butte,43.1")?;
        file.flush()?;

        let result = load_labeled_dataset(file.path());
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("has 1 features, expected 2"));
        Ok(())
    }

    #[test]
    fn test_load_labeled_dataset_header_only() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "Area,Income,Unemployment")?;
        file.flush()?;

        let result = load_labeled_dataset(file.path());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("No data rows loaded"));
        Ok(())
    }

    #[test]
    fn test_load_labeled_dataset_label_without_features() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "Area")?;
        writeln!(file, "Alameda")?;
        file.flush()?;

        let result = load_labeled_dataset(file.path());
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("no feature values"));
        Ok(())
    }

    #[test]
    fn test_load_labeled_dataset_file_not_found() {
        let path = Path::new("this_file_does_not_exist.csv");
        let result = load_labeled_dataset(path);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Data CSV file not found"));
    }
}
