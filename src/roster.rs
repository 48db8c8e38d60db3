//! The built-in roster: the portrait files of the current team, in the order
//! they appear on the page.

pub const MEMBERS: &[&str] = &[
    "Miss. Gauri Mathur.jpg",
    "Miss. Ishita Tripathi.jpg",
    "Miss. Lehar Nimodiya.jpg",
    "Miss. Rutu Vekariya.jpg",
    "Miss. Taniya Shah.jpg",
    "Miss. Vedika Jawaria.jpg",
    "Mr. Aarav Rai Mathur.jpg",
    "Mr. Aditya Wagh.jpg",
    "Mr. Aryan Chandani.jpg",
    "Mr. Harshvardhan Karadbhajre.jpg",
    "Mr. Jay Patel.jpg",
    "Mr. Krish Prajapati.jpg",
    "Mr. Krish Umredkar.jpg",
    "Mr. Lavesh Patil.jpg",
    "Mr. Parth Saxena.jpg",
    "Mr. Rohan Painter.jpg",
    "Mr. Sarthak Rathi.jpg",
    "Mr. Shrivin Nave.jpg",
    "Mr. Srikar Molahalli.jpg",
    "Mr. Vaidik Nandawana.jpg",
    "Mr. Vihan Joshi.jpg",
];

/// Returns the built-in roster as owned strings.
pub fn members() -> Vec<String> {
    MEMBERS.iter().map(|m| (*m).to_owned()).collect()
}
