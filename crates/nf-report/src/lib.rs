pub mod ddl;

pub use ddl::{PLACEHOLDER_TYPE, render_statements, render_table, write_script};
