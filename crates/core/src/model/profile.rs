use serde::Serialize;

use crate::model::stream::Stream;

/// Display data for a recommended stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StreamProfile {
    pub title: &'static str,
    pub description: &'static str,
    pub careers: &'static [&'static str],
    /// Colour token the UI maps to a badge style.
    pub accent: &'static str,
}

static SCIENCE: StreamProfile = StreamProfile {
    title: "Science Stream",
    description: "You have a strong analytical mind and enjoy discovering how things work.",
    careers: &["Engineer", "Doctor", "Researcher", "Data Scientist"],
    accent: "blue",
};

static ARTS: StreamProfile = StreamProfile {
    title: "Arts Stream",
    description: "You're creative and enjoy expressing ideas through various mediums.",
    careers: &["Writer", "Designer", "Teacher", "Psychologist"],
    accent: "purple",
};

static COMMERCE: StreamProfile = StreamProfile {
    title: "Commerce Stream",
    description: "You have strong business acumen and enjoy working with finances.",
    careers: &["Accountant", "Manager", "Entrepreneur", "Financial Advisor"],
    accent: "green",
};

static VOCATIONAL: StreamProfile = StreamProfile {
    title: "Vocational Training",
    description: "You prefer hands-on work and practical skill development.",
    careers: &["Technician", "Chef", "Mechanic", "Designer"],
    accent: "orange",
};

impl Stream {
    /// Static display profile for this stream.
    #[must_use]
    pub fn profile(self) -> &'static StreamProfile {
        match self {
            Stream::Science => &SCIENCE,
            Stream::Arts => &ARTS,
            Stream::Commerce => &COMMERCE,
            Stream::Vocational => &VOCATIONAL,
        }
    }
}
