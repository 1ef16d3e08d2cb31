// ADIF (Amateur Data Interchange Format) log model
// Reference: https://adif.org/

pub mod logfile;
pub mod record;
pub mod userdef;

pub use logfile::{Logfile, PROGRAM_ID, PROGRAM_VERSION};
pub use record::{app_field_parts, is_valid_field_name, Field, FieldOrder, Record};
