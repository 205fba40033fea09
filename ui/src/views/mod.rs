mod data_viewer;
pub use data_viewer::DataViewer;

mod deidentified;
pub use deidentified::Deidentified;
