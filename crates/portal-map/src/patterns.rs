//! Source-header synonyms for every canonical field.

/// How one canonical record field is located in an imported row.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Canonical field name.
    pub name: &'static str,
    /// Header synonyms tried through the field matcher, in priority order.
    pub synonyms: &'static [&'static str],
    /// Exact, case-sensitive keys tried when no synonym resolves.
    pub fallback_keys: &'static [&'static str],
}

const fn spec(
    name: &'static str,
    synonyms: &'static [&'static str],
    fallback_keys: &'static [&'static str],
) -> FieldSpec {
    FieldSpec {
        name,
        synonyms,
        fallback_keys,
    }
}

pub const FACULTY_FIELDS: [FieldSpec; 4] = [
    spec(
        "designation",
        &["designation", "title", "position", "rank"],
        &["designation", "Designation"],
    ),
    spec(
        "count",
        &["count", "number", "total", "faculty"],
        &["count", "Count", "number"],
    ),
    spec(
        "phd",
        &["phd", "doctorate", "phdcount", "withphd"],
        &["phd", "PhD", "phdcount"],
    ),
    spec(
        "experience",
        &["experience", "exp", "years", "yearsofexperience"],
        &["experience", "Experience"],
    ),
];

pub const STUDENT_FIELDS: [FieldSpec; 4] = [
    spec(
        "program",
        &["program", "course", "degree", "programname"],
        &["program", "Program", "programname"],
    ),
    spec(
        "year",
        &["year", "academicyear", "level", "class"],
        &["year", "Year", "academicyear"],
    ),
    spec(
        "students",
        &["students", "enrolled", "numberofstudents", "strength"],
        &["students", "Students", "numberofstudents"],
    ),
    spec(
        "intake",
        &["intake", "capacity", "intakecapacity", "seats"],
        &["intake", "Intake", "intakecapacity"],
    ),
];

pub const PLACEMENT_FIELDS: [FieldSpec; 4] = [
    spec(
        "company",
        &["company", "organization", "companyname", "employer"],
        &["company", "Company", "companyname"],
    ),
    spec(
        "package",
        &["package", "salary", "ctc", "compensation"],
        &["package", "Package", "salary"],
    ),
    spec(
        "studentsPlaced",
        &["studentsplaced", "placed", "hired", "count"],
        &["studentsplaced", "StudentsPlaced", "placed"],
    ),
    spec(
        "type",
        &["type", "placementtype", "category", "mode"],
        &["type", "Type", "placementtype"],
    ),
];

/// A canonical key of sections 1-3 and the merged keys it is read from.
#[derive(Debug, Clone, Copy)]
pub struct CuratedField {
    pub target: &'static str,
    /// Synonym passed through the field matcher before the direct keys.
    pub synonym: Option<&'static str>,
    /// Normalised merged keys tried in order.
    pub keys: &'static [&'static str],
}

const fn curated(
    target: &'static str,
    synonym: Option<&'static str>,
    keys: &'static [&'static str],
) -> CuratedField {
    CuratedField {
        target,
        synonym,
        keys,
    }
}

pub const SCHOOL_FIELDS: [CuratedField; 3] = [
    curated(
        "schoolName",
        Some("schoolname"),
        &["schoolname", "school", "name"],
    ),
    curated("location", Some("location"), &["location", "address"]),
    curated("department", Some("department"), &["department", "dept"]),
];

pub const ESTABLISHMENT_FIELDS: [CuratedField; 2] = [
    curated(
        "year",
        None,
        &["year", "yearofestablishment", "established", "since"],
    ),
    curated(
        "history",
        None,
        &["history", "briefhistory", "background", "description"],
    ),
];

pub const HOD_FIELDS: [CuratedField; 4] = [
    curated(
        "hodName",
        None,
        &["hodname", "name", "headofdepartment", "hod"],
    ),
    curated("email", None, &["email", "emailaddress", "mail"]),
    curated(
        "phone",
        None,
        &["phone", "phonenumber", "contact", "mobile"],
    ),
    curated(
        "qualification",
        None,
        &["qualification", "degree", "education"],
    ),
];
