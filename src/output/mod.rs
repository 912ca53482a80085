pub mod formatter;

pub use formatter::{
    format_features_table, format_json, format_summary, format_tsv, format_value,
    should_use_colors, write_output,
};
