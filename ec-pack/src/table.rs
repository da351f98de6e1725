use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use serde::Serialize;

use std::io::Read;
use std::path::Path;

use crate::EcError;

/// A delimited table held fully in memory
///
/// Every cell is kept as text. Rows shorter than the header are padded
/// with empty cells, so column lookups never fall off a row.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    source: String,
}

impl Table {
    pub fn read<P: AsRef<Path>>(path: P, sep: u8) -> Result<Self, EcError> {
        let source = path
            .as_ref()
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.as_ref().display().to_string());
        let file = std::fs::File::open(path.as_ref())?;

        Self::from_reader(file, sep, &source)
    }

    pub fn from_reader<R: Read>(rdr: R, sep: u8, source: &str) -> Result<Self, EcError> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(sep)
            .has_headers(true)
            .flexible(true)
            .from_reader(rdr);

        let headers = Self::to_vec(rdr.headers()?);
        let mut rows = Vec::new();

        for record in rdr.records() {
            let mut row = Self::to_vec(&record?);
            if row.len() < headers.len() {
                row.resize(headers.len(), String::new());
            }
            rows.push(row);
        }

        Ok(Self {
            headers,
            rows,
            source: source.to_string(),
        })
    }

    fn to_vec(record: &StringRecord) -> Vec<String> {
        record.iter().map(|s| s.to_string()).collect()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn find_column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// index of a required column
    pub fn column(&self, name: &str) -> Result<usize, EcError> {
        self.find_column(name).ok_or_else(|| EcError::MissingColumn {
            column: name.to_string(),
            file: self.source.clone(),
            available: self.headers.clone(),
        })
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(|s| s.as_str())
    }

    /// all values of a column, in row order
    pub fn values(&self, col: usize) -> impl Iterator<Item = &str> + '_ {
        self.rows
            .iter()
            .map(move |r| r.get(col).map(|s| s.as_str()).unwrap_or_default())
    }

    /// Append a column; `values` must have one entry per row
    ///
    /// Rows holding more cells than the header cannot take a new column
    /// without shifting data, so they are an error and the table is left
    /// untouched.
    pub fn push_column(&mut self, name: &str, values: Vec<String>) -> Result<(), EcError> {
        debug_assert_eq!(values.len(), self.rows.len());

        let width = self.headers.len();
        if let Some((row, cells)) = self
            .rows
            .iter()
            .enumerate()
            .find(|(_, r)| r.len() > width)
        {
            return Err(EcError::RowTooLong {
                file: self.source.clone(),
                row: row + 1,
                cells: cells.len(),
                columns: width,
            });
        }

        self.headers.push(name.to_string());
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.resize(width, String::new());
            row.push(value);
        }

        Ok(())
    }

    /// new table with the same header and the selected rows
    pub fn subset(&self, indices: &[usize]) -> Table {
        Table {
            headers: self.headers.clone(),
            rows: indices
                .iter()
                .filter_map(|&i| self.rows.get(i).cloned())
                .collect(),
            source: self.source.clone(),
        }
    }

    pub fn write<P: AsRef<Path>>(&self, path: P, sep: u8) -> Result<(), EcError> {
        let mut writer = WriterBuilder::new()
            .delimiter(sep)
            .flexible(true)
            .from_path(path)?;

        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }

        writer.flush()?;
        Ok(())
    }
}

/// Write serializable rows under an explicit header
///
/// The header is written even when `records` is empty. `headers` must
/// list the serialized fields in declaration order.
pub fn write_records<P, T>(path: P, sep: u8, headers: &[&str], records: &[T]) -> Result<(), EcError>
where
    P: AsRef<Path>,
    T: Serialize,
{
    let mut writer = WriterBuilder::new()
        .delimiter(sep)
        .has_headers(false)
        .from_path(path)?;

    writer.write_record(headers)?;
    for record in records {
        writer.serialize(record)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TSV: &str = "Entry\tEntry Name\tEC number\n\
                       P40261\tNNMT_HUMAN\t2.1.1.1\n\
                       P21964\tCOMT_HUMAN\t\n\
                       Q00000\tSHORT_ROW\n";

    fn table() -> Table {
        Table::from_reader(TSV.as_bytes(), b'\t', "MT2.tsv").unwrap()
    }

    #[test]
    fn test_read_pads_short_rows() {
        let t = table();

        assert_eq!(t.len(), 3);
        assert_eq!(t.headers, vec!["Entry", "Entry Name", "EC number"]);
        assert_eq!(t.cell(2, 2), Some(""));
        assert_eq!(t.values(2).collect::<Vec<_>>(), vec!["2.1.1.1", "", ""]);
    }

    #[test]
    fn test_missing_column_lists_available() {
        let err = table().column("EC").unwrap_err();
        let msg = err.to_string();

        assert!(msg.contains("'EC'"));
        assert!(msg.contains("MT2.tsv"));
        assert!(msg.contains("EC number"));
    }

    #[test]
    fn test_push_column_and_subset() {
        let mut t = table();
        t.push_column(
            "MT_group",
            vec!["N_MT".to_string(), "NO_EC".to_string(), "NO_EC".to_string()],
        )
        .unwrap();

        let sub = t.subset(&[1, 2]);
        assert_eq!(sub.headers.last().map(|s| s.as_str()), Some("MT_group"));
        assert_eq!(sub.len(), 2);
        assert_eq!(sub.cell(0, 1), Some("COMT_HUMAN"));
        assert_eq!(sub.cell(1, 3), Some("NO_EC"));
    }

    #[test]
    fn test_write_and_read_back_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let mut t = table();
        t.rows[0][1] = "name, with comma".to_string();
        t.write(&path, b',').unwrap();

        let back = Table::read(&path, b',').unwrap();
        assert_eq!(back.cell(0, 1), Some("name, with comma"));
        assert_eq!(back.source(), "out.csv");
    }

    #[test]
    fn test_write_records() {
        #[derive(Serialize)]
        struct Row<'a> {
            #[serde(rename = "MT_group")]
            group: &'a str,
            rows: usize,
        }

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("counts.tsv");
        write_records(
            &path,
            b'\t',
            &["MT_group", "rows"],
            &[Row { group: "N_MT", rows: 2 }, Row { group: "NO_EC", rows: 1 }],
        )
        .unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "MT_group\trows\nN_MT\t2\nNO_EC\t1\n"
        );

        let empty: [Row; 0] = [];
        write_records(&path, b'\t', &["MT_group", "rows"], &empty).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "MT_group\trows\n");
    }

    #[test]
    fn test_push_column_rejects_rows_longer_than_header() {
        let mut t = Table::from_reader(
            "Entry\tEC number\nP1\t2.1.1.1\textra\nP2\t2.1.1.6\n".as_bytes(),
            b'\t',
            "MT2.tsv",
        )
        .unwrap();
        assert_eq!(t.rows[0].len(), 3);

        let err = t
            .push_column("MT_group", vec!["N_MT".to_string(), "O_MT".to_string()])
            .unwrap_err();

        assert!(matches!(
            err,
            EcError::RowTooLong {
                row: 1,
                cells: 3,
                columns: 2,
                ..
            }
        ));
        assert_eq!(t.headers.len(), 2);
        assert_eq!(t.cell(0, 2), Some("extra"));
    }
}
