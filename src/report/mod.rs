mod fit_report;
mod fitted_line;

pub use fit_report::FitReport;
pub use fitted_line::{DEFAULT_LINE_POINTS, FittedLine, LineFormat, LinePoint};
