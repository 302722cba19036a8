// transcode.rs - Streaming CSV sanitization pass

use crate::core::sanitize::sanitize_row;
use crate::data::CsvSource;
use crate::output::CsvSink;
use indicatif::{ProgressBar, ProgressStyle};

/// Counters from one sanitization pass, for the run summary.
#[derive(Debug, Clone, Copy)]
pub struct TranscodeSummary {
    pub rows_total: usize,
    pub data_rows: usize,
    pub cells_rewritten: usize,
}

/// Stream the input CSV into the output path, one record at a time.
///
/// Row 0 is treated as the header and copied through unsanitized; every cell
/// of every later row is rewritten by the cell sanitizer. Row cardinality is
/// preserved. Input and output stay open for the whole pass and close on
/// every exit path when the source and sink go out of scope.
pub fn sanitize_csv(input_path: &str, output_path: &str) -> Result<TranscodeSummary, String> {
    let source = CsvSource::open(input_path)?;
    let mut sink = CsvSink::create(output_path)?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] {spinner:.cyan} {pos} rows {msg}")
            .unwrap(),
    );

    let mut rows_total = 0;
    let mut data_rows = 0;
    let mut cells_rewritten = 0;

    for (row_index, row) in source.rows().enumerate() {
        let mut row = row?;

        if row_index > 0 {
            cells_rewritten += sanitize_row(&mut row);
            data_rows += 1;
        }

        sink.write_row(&row)?;
        rows_total += 1;
        pb.inc(1);
    }

    sink.finish()?;
    pb.finish_with_message(format!("({} cells rewritten)", cells_rewritten));

    Ok(TranscodeSummary {
        rows_total,
        data_rows,
        cells_rewritten,
    })
}
