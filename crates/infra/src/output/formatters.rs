pub mod delimited;
pub mod structured;
pub mod table;

pub use delimited::output_delimited;
pub use structured::output_json;
pub use table::output_table;
