//! CSV export for computed production plans.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::plan::DispatchReport;

/// Column header for plan CSV export.
const HEADER: &str = "name,type,cost_eur_per_mwh,min_mw,max_mw,p_mw";

/// Exports a computed plan to a CSV file at the given path.
///
/// Writes a header row followed by one data row per plant in merit order.
/// Produces deterministic output for identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(report: &DispatchReport, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(report, buf)
}

/// Writes a computed plan as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(report: &DispatchReport, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(','))?;

    for a in &report.assignments {
        let row = crate::plan::PlantProduction::from(a);
        wtr.write_record(&[
            a.name.clone(),
            a.plant_type.as_str().to_string(),
            format!("{:.4}", a.cost_eur_per_mwh),
            format!("{:.1}", a.min_mw),
            format!("{:.1}", a.max_mw),
            format!("{:.1}", row.p),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::{PlantAssignment, PlantType};

    fn make_report() -> DispatchReport {
        DispatchReport {
            requested_mw: 130.0,
            achieved_mw: 130.0,
            overshoot_mw: 0.0,
            assignments: vec![
                PlantAssignment {
                    name: "windpark1".to_string(),
                    plant_type: PlantType::Windturbine,
                    cost_eur_per_mwh: 0.0,
                    min_mw: 90.0,
                    max_mw: 90.0,
                    mw: 90.0,
                },
                PlantAssignment {
                    name: "gasfiredbig1".to_string(),
                    plant_type: PlantType::Gasfired,
                    cost_eur_per_mwh: 25.2830,
                    min_mw: 100.0,
                    max_mw: 460.0,
                    mw: 40.0,
                },
            ],
        }
    }

    #[test]
    fn writes_header_and_one_row_per_assignment() {
        let mut out = Vec::new();
        write_csv(&make_report(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], HEADER);
        assert_eq!(lines[1], "windpark1,windturbine,0.0000,90.0,90.0,90.0");
        assert_eq!(lines[2], "gasfiredbig1,gasfired,25.2830,100.0,460.0,40.0");
    }

    #[test]
    fn output_is_deterministic() {
        let report = make_report();
        let mut first = Vec::new();
        let mut second = Vec::new();
        write_csv(&report, &mut first).unwrap();
        write_csv(&report, &mut second).unwrap();
        assert_eq!(first, second);
    }
}
