//! Output modules for exporting workout data

pub mod csv_export;

pub use csv_export::CsvExporter;
