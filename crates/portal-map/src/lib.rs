#![deny(unsafe_code)]

//! Field matching and record mapping for imported portal documents.

pub mod mapper;
pub mod matcher;
pub mod patterns;
pub mod text;

pub use mapper::{
    FieldResolution, ResolvedFrom, explain_row, field_specs, map_faculty, map_faculty_row,
    map_placement_row, map_placements, map_student_row, map_students, map_table, parse_count,
    resolve_field,
};
pub use matcher::{match_field, normalize_key};
pub use patterns::{CuratedField, FieldSpec};
pub use text::{MergedFields, map_text_section, merge_rows};
