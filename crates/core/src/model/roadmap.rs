use serde::Serialize;

use crate::model::ids::MilestoneId;
use crate::model::stream::Stream;

//
// ─── MILESTONE ─────────────────────────────────────────────────────────────────
//

/// One step on a stream's career roadmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub id: MilestoneId,
    pub label: &'static str,
    pub description: &'static str,
    /// `None` only for the root (the stream itself).
    pub parent: Option<MilestoneId>,
}

const fn root(label: &'static str, description: &'static str) -> Milestone {
    Milestone {
        id: MilestoneId::new(1),
        label,
        description,
        parent: None,
    }
}

const fn step(id: u8, parent: u8, label: &'static str, description: &'static str) -> Milestone {
    Milestone {
        id: MilestoneId::new(id),
        label,
        description,
        parent: Some(MilestoneId::new(parent)),
    }
}

static SCIENCE: [Milestone; 9] = [
    root(
        "Science Stream",
        "Strong foundation in Physics, Chemistry, Mathematics",
    ),
    step(2, 1, "B.Tech/B.E.", "Engineering degree - 4 years"),
    step(3, 1, "MBBS", "Medical degree - 5.5 years"),
    step(4, 1, "B.Sc.", "Science degree - 3 years"),
    step(5, 2, "Software Engineer", "Technology industry career"),
    step(6, 2, "Data Scientist", "Analytics and AI specialist"),
    step(7, 3, "Doctor", "Healthcare professional"),
    step(8, 4, "Researcher", "Academic or industrial research"),
    step(9, 4, "Science Teacher", "Education sector career"),
];

static ARTS: [Milestone; 6] = [
    root("Arts Stream", "Literature, History, Philosophy foundation"),
    step(2, 1, "B.A.", "Arts degree - 3 years"),
    step(3, 1, "B.Ed", "Education degree - 2 years"),
    step(4, 2, "Civil Services", "Government administration"),
    step(5, 2, "Journalist", "Media and communications"),
    step(6, 3, "Teacher", "Education profession"),
];

static COMMERCE: [Milestone; 7] = [
    root("Commerce Stream", "Business, Economics, Accounting foundation"),
    step(2, 1, "B.Com", "Commerce degree - 3 years"),
    step(3, 1, "BBA", "Business Administration - 3 years"),
    step(4, 2, "CA/CPA", "Chartered Accountant"),
    step(5, 2, "Banking", "Financial services career"),
    step(6, 3, "MBA", "Masters in Business Admin"),
    step(7, 3, "Business Manager", "Corporate management role"),
];

static VOCATIONAL: [Milestone; 5] = [
    root("Vocational Stream", "Skill-based practical education"),
    step(2, 1, "ITI/Diploma", "Technical certification"),
    step(3, 1, "Skill Training", "Specialized skill development"),
    step(4, 2, "Technician", "Technical support role"),
    step(5, 3, "Entrepreneur", "Start your own business"),
];

//
// ─── ROADMAP ───────────────────────────────────────────────────────────────────
//

/// Static tree of education and career milestones for a stream.
///
/// Milestones are stored parent-before-child, rooted at the stream itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Roadmap {
    stream: Stream,
    milestones: &'static [Milestone],
}

impl Roadmap {
    #[must_use]
    pub fn stream(&self) -> Stream {
        self.stream
    }

    #[must_use]
    pub fn milestones(&self) -> &'static [Milestone] {
        self.milestones
    }

    #[must_use]
    pub fn root(&self) -> &'static Milestone {
        &self.milestones[0]
    }

    #[must_use]
    pub fn get(&self, id: MilestoneId) -> Option<&'static Milestone> {
        self.milestones.iter().find(|m| m.id == id)
    }

    /// Direct successors of `id`, in declaration order.
    pub fn children(&self, id: MilestoneId) -> impl Iterator<Item = &'static Milestone> {
        self.milestones
            .iter()
            .filter(move |m| m.parent == Some(id))
    }

    /// Milestones with no successors (the career end points).
    pub fn leaves(&self) -> impl Iterator<Item = &'static Milestone> + '_ {
        self.milestones
            .iter()
            .filter(|m| self.children(m.id).next().is_none())
    }

    /// Distance from the root; `None` for an unknown id.
    #[must_use]
    pub fn depth(&self, id: MilestoneId) -> Option<usize> {
        let mut current = self.get(id)?;
        let mut depth = 0;
        while let Some(parent) = current.parent {
            current = self.get(parent)?;
            depth += 1;
            if depth > self.milestones.len() {
                return None;
            }
        }
        Some(depth)
    }
}

impl Stream {
    /// Career roadmap shown alongside this stream's result.
    #[must_use]
    pub fn roadmap(self) -> Roadmap {
        let milestones: &'static [Milestone] = match self {
            Stream::Science => &SCIENCE,
            Stream::Arts => &ARTS,
            Stream::Commerce => &COMMERCE,
            Stream::Vocational => &VOCATIONAL,
        };
        Roadmap {
            stream: self,
            milestones,
        }
    }
}
