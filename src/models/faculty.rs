use serde::Serialize;

/// Faculty mentors are site content, not backend records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FacultyMentor {
    pub name: &'static str,
    pub designation: &'static str,
    pub bio: &'static str,
    pub linkedin: &'static str,
}

pub const FACULTY_MENTORS: &[FacultyMentor] = &[
    FacultyMentor {
        name: "Dr. (Prof.) Sachin Ahuja",
        designation: "Executive Director",
        bio: "Guiding the club with years of academic and industry experience in Computer Science.",
        linkedin: "https://www.linkedin.com/in/dr-sachin-ahuja-0885a235/",
    },
    FacultyMentor {
        name: "Dr. (Prof.) Puneet Kumar",
        designation: "Associate Director",
        bio: "Passionate about student development and research in AI and Data Science.",
        linkedin: "https://www.linkedin.com/in/dr-puneet-kumar-2a84b531/",
    },
    FacultyMentor {
        name: "Dr. (Prof.) Jaspreet Singh Batth",
        designation: "Batchhead CSE 2nd Year",
        bio: "Renowned researcher and educator with expertise in advanced computing technologies and student mentorship.",
        linkedin: "https://linkedin.com/in/jaspreet-singh-batth",
    },
    FacultyMentor {
        name: "Dr. Gurmeet Kaur Saini",
        designation: "Associate Professor",
        bio: "Expert in software engineering and a constant motivator for the club.",
        linkedin: "https://www.linkedin.com/in/gurmeet-kaur-saini-4b6815213/",
    },
    FacultyMentor {
        name: "Er. Dilshad Kaur",
        designation: "Faculty Advisor",
        bio: "Encourages innovation and creativity among students.",
        linkedin: "https://www.linkedin.com/in/dilshad-kaur-201158254/",
    },
    FacultyMentor {
        name: "Er. Kamalpreet Saini",
        designation: "Faculty Co-Advisor",
        bio: "Dedicated to bridging the gap between academia and industry.",
        linkedin: "https://www.linkedin.com/in/komalpreet-saini-8a239664/",
    },
];
