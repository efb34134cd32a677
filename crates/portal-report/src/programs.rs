//! Programme catalogue printed under "Programs Offered".

pub struct ProgramGroup {
    pub heading: &'static str,
    pub duration: &'static str,
    pub programs: &'static [&'static str],
}

pub const PROGRAM_GROUPS: [ProgramGroup; 3] = [
    ProgramGroup {
        heading: "UNDERGRADUATE PROGRAMS",
        duration: "4 Years",
        programs: &[
            "B.Tech. Computer Science and Engineering (AI & ML)",
            "B.Tech. Computer Science and Engineering (Cyber Security)",
            "B.Tech. Computer Science and Engineering (Data Science)",
            "B.Tech. Biomedical Engineering",
            "B.Tech. Biotechnology",
            "B.Tech. Civil Engineering with Computer Application",
            "B.Tech. Computer Science and Engineering",
            "B.Tech. Electrical and Computer Engineering",
            "B.Tech. Electronics and Communications Engineering",
            "B.Tech. Electronics and Engineering (VLSI Design and Technology)",
            "B.Tech. Mechanical Engineering",
            "B.Tech. Robotics & Artificial Intelligence",
        ],
    },
    ProgramGroup {
        heading: "POSTGRADUATE PROGRAMS",
        duration: "2 Years",
        programs: &[
            "M.Tech. Data Science",
            "M.Tech. Food Processing Technology",
            "M.Tech. Structural Engineering",
            "M.Tech. Construction Technology and Management",
            "M.Tech. Computer Science and Engineering",
            "M.Tech. VLSI Design",
            "M.Tech. Power System and Automation",
            "M.Tech. Machine Design and Robotics",
            "M.Tech. Manufacturing Technology and Automation",
            "M.Tech. Geotechnical Engineering",
        ],
    },
    ProgramGroup {
        heading: "Ph.D. PROGRAMS",
        duration: "3\u{2013}5 Years",
        programs: &[
            "Ph.D. in Biotechnology",
            "Ph.D. in Civil Engineering",
            "Ph.D. in Computer Science & Engineering",
            "Ph.D. in Electronics & Communication Engineering",
            "Ph.D. in Electrical & Electronics Engineering",
            "Ph.D. in Mechanical Engineering",
        ],
    },
];

/// Curriculum revision shown for an academic year.
pub fn curriculum_revision(year: &str) -> u16 {
    if year == "2023-24" { 2023 } else { 2024 }
}
